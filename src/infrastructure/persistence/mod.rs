//! PostgreSQL implementations of the gateway collaborators.
//!
//! - [`PgQueryExecutor`] - Renders and runs [`crate::domain::query::SelectQuery`] via SQLx
//! - [`StorefrontFieldHelper`] - Column lists of the storefront schema

pub mod field_helper;
pub mod pg_query_executor;

pub use field_helper::{DEFAULT_LINK_ATTRIBUTE_COLUMNS, StorefrontFieldHelper};
pub use pg_query_executor::PgQueryExecutor;
