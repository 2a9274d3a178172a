//! Price group and its quantity-based discount tiers.

use std::sync::Arc;

use super::CustomerGroup;

/// A price group owning an ordered list of discount tiers.
///
/// `discounts` is kept sorted by ascending [`PriceGroupDiscount::threshold`].
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGroup {
    pub id: i64,
    pub name: String,
    pub discounts: Vec<PriceGroupDiscount>,
}

impl PriceGroup {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            discounts: Vec::new(),
        }
    }
}

/// One discount tier of a price group for a specific customer group.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGroupDiscount {
    pub id: i64,
    pub group_id: i64,
    /// Quantity from which the discount applies.
    pub threshold: f64,
    pub percentage: f64,
    pub customer_group: Option<Arc<CustomerGroup>>,
}

impl PriceGroupDiscount {
    pub fn new(id: i64, group_id: i64, threshold: f64, percentage: f64) -> Self {
        Self {
            id,
            group_id,
            threshold,
            percentage,
            customer_group: None,
        }
    }

    /// Attaches the customer group the discount was resolved for.
    pub fn set_customer_group(&mut self, customer_group: Arc<CustomerGroup>) {
        self.customer_group = Some(customer_group);
    }
}
