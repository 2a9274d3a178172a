//! Resolution of price groups and discount tiers for a customer group.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{CustomerGroup, PriceGroup, ShopContext};
use crate::domain::hydration::{PriceHydrator, columns};
use crate::domain::query::{Direction, Param, Predicate, Row, SelectQuery};
use crate::domain::repositories::{Entity, FieldSelector, QueryExecutor};
use crate::error::AppError;

const DISCOUNT_TABLE: &str = "s_core_pricegroups_discounts";
const PRICE_GROUP_TABLE: &str = "s_core_pricegroups";

/// Resolves the price groups that grant discounts to a customer group.
///
/// The returned map iterates by ascending price group id and every group's
/// discounts are ordered by ascending threshold. Each discount references the
/// customer group passed in, sharing the same allocation.
pub struct PriceGroupResolver<Q: QueryExecutor, F: FieldSelector> {
    executor: Arc<Q>,
    fields: Arc<F>,
    hydrator: PriceHydrator,
}

impl<Q: QueryExecutor, F: FieldSelector> PriceGroupResolver<Q, F> {
    /// Creates a new price group resolver.
    pub fn new(executor: Arc<Q>, fields: Arc<F>) -> Self {
        Self {
            executor,
            fields,
            hydrator: PriceHydrator::new(),
        }
    }

    /// Returns all price groups with discounts for `customer_group`, keyed by
    /// price group id.
    ///
    /// A customer group without discounts yields an empty map.
    ///
    /// # Errors
    ///
    /// Propagates executor errors unchanged and returns
    /// [`AppError::Hydration`] if a discount row is incomplete.
    #[tracing::instrument(skip_all, fields(customer_group = customer_group.id))]
    pub async fn resolve_price_groups(
        &self,
        customer_group: &Arc<CustomerGroup>,
        context: &ShopContext,
    ) -> Result<BTreeMap<i64, PriceGroup>, AppError> {
        let query = self.build_query(customer_group.id);
        let rows = self.executor.fetch_all(&query, context).await?;
        tracing::debug!(rows = rows.len(), "Fetched price group discount rows");

        let mut price_groups = BTreeMap::new();
        for group_rows in group_by_price_group(rows)?.into_values() {
            let mut price_group = self.hydrator.hydrate_price_group(&group_rows)?;

            for discount in &mut price_group.discounts {
                discount.set_customer_group(Arc::clone(customer_group));
            }

            price_groups.insert(price_group.id, price_group);
        }

        Ok(price_groups)
    }

    /// Builds the discount query for a customer group id.
    pub fn build_query(&self, customer_group_id: i64) -> SelectQuery {
        let discount = Entity::PriceGroupDiscount.alias();
        let group = Entity::PriceGroup.alias();

        SelectQuery::new()
            .select(self.fields.fields(Entity::PriceGroupDiscount))
            .add_select(self.fields.fields(Entity::PriceGroup))
            .from(DISCOUNT_TABLE, discount)
            .inner_join(
                PRICE_GROUP_TABLE,
                group,
                format!("{group}.id = {discount}.group_id"),
            )
            .and_where(Predicate::eq(
                format!("{discount}.customer_group_id"),
                Param::Int(customer_group_id),
            ))
            .group_by(format!("{discount}.id"))
            .add_group_by(format!("{group}.id"))
            .order_by(format!("{discount}.group_id"), Direction::Asc)
            .add_order_by(format!("{discount}.discount_start"), Direction::Asc)
    }
}

/// Groups rows by the price group their discount belongs to, keeping row
/// order within each group.
pub fn group_by_price_group(rows: Vec<Row>) -> Result<BTreeMap<i64, Vec<Row>>, AppError> {
    let mut groups: BTreeMap<i64, Vec<Row>> = BTreeMap::new();

    for row in rows {
        let group_id = row.require_i64(columns::DISCOUNT_GROUP_ID)?;
        groups.entry(group_id).or_default().push(row);
    }

    Ok(groups)
}
