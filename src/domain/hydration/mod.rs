//! Row hydration: turning executor rows into entities.
//!
//! Hydrators read rows by the column aliases in [`columns`], which the field
//! helper in `crate::infrastructure::persistence` emits. Missing required
//! columns fail the whole call with [`crate::error::AppError::Hydration`].

pub mod link_hydrator;
pub mod price_hydrator;

pub use link_hydrator::LinkHydrator;
pub use price_hydrator::PriceHydrator;

/// Column aliases shared between field selection and hydration.
pub mod columns {
    pub const LINK_ID: &str = "__link_id";
    pub const LINK_PRODUCT_ID: &str = "__link_article_id";
    pub const LINK_LABEL: &str = "__link_description";
    pub const LINK_URL: &str = "__link_link";
    pub const LINK_TARGET: &str = "__link_target";

    pub const LINK_ATTRIBUTE_PREFIX: &str = "__linkattribute_";
    pub const LINK_ATTRIBUTE_ID: &str = "__linkattribute_id";

    pub const PRICE_GROUP_ID: &str = "__pricegroup_id";
    pub const PRICE_GROUP_NAME: &str = "__pricegroup_description";

    pub const DISCOUNT_ID: &str = "__pricegroupdiscount_id";
    pub const DISCOUNT_GROUP_ID: &str = "__pricegroupdiscount_group_id";
    pub const DISCOUNT_CUSTOMER_GROUP_ID: &str = "__pricegroupdiscount_customer_group_id";
    pub const DISCOUNT_THRESHOLD: &str = "__pricegroupdiscount_discount_start";
    pub const DISCOUNT_PERCENTAGE: &str = "__pricegroupdiscount_discount";
}
