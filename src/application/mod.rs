//! Application layer: the storefront gateways.
//!
//! Gateways translate typed requests into one [`crate::domain::query::SelectQuery`]
//! each, run it through a [`crate::domain::repositories::QueryExecutor`] and
//! hydrate the rows into entities.
//!
//! # Available Gateways
//!
//! - [`services::link_resolver::LinkResolver`] - Related links per product
//! - [`services::price_group_resolver::PriceGroupResolver`] - Price group discounts per customer group

pub mod services;
