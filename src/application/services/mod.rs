//! Storefront gateways.

pub mod link_resolver;
pub mod price_group_resolver;

pub use link_resolver::{LinkMap, LinkResolver};
pub use price_group_resolver::PriceGroupResolver;
