//! # Storefront Gateway
//!
//! Read-only batch gateways for a storefront backed by PostgreSQL.
//!
//! - [`LinkResolver`] resolves the related links of many products with one
//!   query and returns them keyed by product number.
//! - [`PriceGroupResolver`] resolves the price groups and discount tiers
//!   granted to a customer group.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, query descriptions, hydration and collaborator traits
//! - **Application Layer** ([`application`]) - The gateways
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLx query execution and schema column lists
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let config = storefront_gateway::config::load_from_env()?;
//! storefront_gateway::telemetry::init(&config)?;
//!
//! let gateways = Gateways::connect(&config).await?;
//! let links = gateways
//!     .links
//!     .resolve(&[ProductRef::new(2, "SW10002")], &ShopContext::default())
//!     .await?;
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;

pub use application::services::{LinkResolver, PriceGroupResolver};
pub use error::AppError;
pub use state::Gateways;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{LinkMap, LinkResolver, PriceGroupResolver};
    pub use crate::domain::entities::{
        CustomerGroup, LinkAttribute, LinkRecord, PriceGroup, PriceGroupDiscount, ProductRef,
        ShopContext,
    };
    pub use crate::error::AppError;
    pub use crate::state::Gateways;
}
