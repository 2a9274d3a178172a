//! Storefront value objects produced by the gateways.
//!
//! Entities are plain data built fresh for every resolver call and handed to
//! the caller. The only field assigned after hydration is
//! [`PriceGroupDiscount::customer_group`].
//!
//! # Entity Types
//!
//! - [`ProductRef`] - Caller-supplied product identity
//! - [`LinkRecord`] / [`LinkAttribute`] - Related product links
//! - [`CustomerGroup`] - Caller-supplied customer group
//! - [`PriceGroup`] / [`PriceGroupDiscount`] - Discount tiers per customer group
//! - [`ShopContext`] - Request scope passed through to the executor

pub mod customer_group;
pub mod link;
pub mod price_group;
pub mod product;
pub mod shop_context;

pub use customer_group::CustomerGroup;
pub use link::{LinkAttribute, LinkRecord};
pub use price_group::{PriceGroup, PriceGroupDiscount};
pub use product::ProductRef;
pub use shop_context::ShopContext;
