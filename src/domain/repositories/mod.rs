//! Collaborator traits the gateways depend on.
//!
//! The gateways only know these interfaces; concrete implementations live in
//! `crate::infrastructure::persistence`.
//!
//! - [`QueryExecutor`] - Runs a structured query and returns rows
//! - [`FieldSelector`] - Lists the columns to select per logical entity
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod field_selector;
pub mod query_executor;

pub use field_selector::{Entity, FieldSelector};
pub use query_executor::QueryExecutor;

#[cfg(test)]
pub use field_selector::MockFieldSelector;
#[cfg(test)]
pub use query_executor::MockQueryExecutor;
