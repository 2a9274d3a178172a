//! Column selection seam used by the gateways.

use std::fmt;

/// Logical entities the gateways select columns for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Link,
    LinkAttribute,
    PriceGroup,
    PriceGroupDiscount,
}

impl Entity {
    /// Table alias used for the entity in gateway queries.
    pub fn alias(self) -> &'static str {
        match self {
            Entity::Link => "link",
            Entity::LinkAttribute => "linkattribute",
            Entity::PriceGroup => "pricegroup",
            Entity::PriceGroupDiscount => "pricegroupdiscount",
        }
    }

    /// Prefix of the column aliases produced for the entity, e.g. `__link_`.
    pub fn column_prefix(self) -> String {
        format!("__{}_", self.alias())
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

/// Enumerates the select expressions needed to hydrate an entity.
///
/// Every expression has the form `<alias>.<column> AS <prefix><column>` so
/// hydrators can read rows by alias without knowing the physical schema.
#[cfg_attr(test, mockall::automock)]
pub trait FieldSelector: Send + Sync {
    fn fields(&self, entity: Entity) -> Vec<String>;
}
