//! Hydration of price groups and their discount tiers.

use serde_json::json;
use std::collections::HashSet;

use super::columns;
use crate::domain::entities::{PriceGroup, PriceGroupDiscount};
use crate::domain::query::Row;
use crate::error::AppError;

/// Builds [`PriceGroup`]s from discount rows joined with their price group.
#[derive(Debug, Default, Clone, Copy)]
pub struct PriceHydrator;

impl PriceHydrator {
    pub fn new() -> Self {
        Self
    }

    /// Coalesces the rows of one price group into a single [`PriceGroup`].
    ///
    /// Rows repeating a discount id (join fan-out) are skipped. Discounts are
    /// sorted by ascending threshold; ties keep row order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Hydration`] if `rows` is empty, a required column
    /// is missing, or a row belongs to a different price group than the first.
    pub fn hydrate_price_group(&self, rows: &[Row]) -> Result<PriceGroup, AppError> {
        let first = rows.first().ok_or_else(|| {
            AppError::hydration("Cannot hydrate a price group without rows", json!({}))
        })?;

        let mut group = PriceGroup::new(
            first.require_i64(columns::PRICE_GROUP_ID)?,
            first.require_str(columns::PRICE_GROUP_NAME)?,
        );

        let mut seen = HashSet::with_capacity(rows.len());
        for row in rows {
            let discount = self.hydrate_discount(row)?;
            if discount.group_id != group.id {
                return Err(AppError::hydration(
                    "Discount row belongs to another price group",
                    json!({ "discount_id": discount.id, "group_id": discount.group_id, "expected": group.id }),
                ));
            }
            if seen.insert(discount.id) {
                group.discounts.push(discount);
            }
        }

        group
            .discounts
            .sort_by(|a, b| a.threshold.total_cmp(&b.threshold));

        Ok(group)
    }

    /// Hydrates a single discount tier. The customer group is left unset.
    pub fn hydrate_discount(&self, row: &Row) -> Result<PriceGroupDiscount, AppError> {
        Ok(PriceGroupDiscount::new(
            row.require_i64(columns::DISCOUNT_ID)?,
            row.require_i64(columns::DISCOUNT_GROUP_ID)?,
            row.require_f64(columns::DISCOUNT_THRESHOLD)?,
            row.require_f64(columns::DISCOUNT_PERCENTAGE)?,
        ))
    }
}
