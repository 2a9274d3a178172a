//! Column lists for the storefront schema.

use crate::domain::repositories::{Entity, FieldSelector};

const LINK_COLUMNS: [&str; 5] = ["id", "article_id", "description", "link", "target"];
const LINK_ATTRIBUTE_KEY_COLUMNS: [&str; 2] = ["id", "information_id"];
const PRICE_GROUP_COLUMNS: [&str; 2] = ["id", "description"];
const PRICE_GROUP_DISCOUNT_COLUMNS: [&str; 5] = [
    "id",
    "group_id",
    "customer_group_id",
    "discount_start",
    "discount",
];

/// Default free-form columns of `s_articles_information_attributes`.
pub const DEFAULT_LINK_ATTRIBUTE_COLUMNS: [&str; 3] = ["attr1", "attr2", "attr3"];

/// [`FieldSelector`] for the storefront PostgreSQL schema.
///
/// The attribute table is extended by plugins, so its free-form columns are
/// configurable; the key columns are always selected.
#[derive(Debug, Clone)]
pub struct StorefrontFieldHelper {
    link_attribute_columns: Vec<String>,
}

impl StorefrontFieldHelper {
    pub fn new(link_attribute_columns: Vec<String>) -> Self {
        Self {
            link_attribute_columns,
        }
    }

    fn select_expressions<'a>(entity: Entity, columns: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let alias = entity.alias();
        let prefix = entity.column_prefix();

        columns
            .into_iter()
            .map(|column| format!("{alias}.{column} AS {prefix}{column}"))
            .collect()
    }
}

impl Default for StorefrontFieldHelper {
    fn default() -> Self {
        Self::new(
            DEFAULT_LINK_ATTRIBUTE_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        )
    }
}

impl FieldSelector for StorefrontFieldHelper {
    fn fields(&self, entity: Entity) -> Vec<String> {
        match entity {
            Entity::Link => Self::select_expressions(entity, LINK_COLUMNS),
            Entity::LinkAttribute => Self::select_expressions(
                entity,
                LINK_ATTRIBUTE_KEY_COLUMNS
                    .into_iter()
                    .chain(self.link_attribute_columns.iter().map(String::as_str)),
            ),
            Entity::PriceGroup => Self::select_expressions(entity, PRICE_GROUP_COLUMNS),
            Entity::PriceGroupDiscount => {
                Self::select_expressions(entity, PRICE_GROUP_DISCOUNT_COLUMNS)
            }
        }
    }
}
