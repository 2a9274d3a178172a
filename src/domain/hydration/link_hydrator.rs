//! Hydration of related product links.

use super::columns;
use crate::domain::entities::{LinkAttribute, LinkRecord};
use crate::domain::query::Row;
use crate::error::AppError;

/// Attribute columns that identify the attribute row rather than describe the link.
const ATTRIBUTE_KEY_COLUMNS: [&str; 2] = ["id", "information_id"];

/// Builds [`LinkRecord`]s from link rows outer-joined with their attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkHydrator;

impl LinkHydrator {
    pub fn new() -> Self {
        Self
    }

    /// Hydrates one row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Hydration`] if a link column is missing, NULL or
    /// mistyped. Attribute columns may be absent or NULL.
    pub fn hydrate(&self, row: &Row) -> Result<LinkRecord, AppError> {
        let link = LinkRecord::new(
            row.require_i64(columns::LINK_ID)?,
            row.require_i64(columns::LINK_PRODUCT_ID)?,
            row.require_str(columns::LINK_LABEL)?,
            row.require_str(columns::LINK_URL)?,
            row.require_str(columns::LINK_TARGET)?,
        );

        Ok(match self.hydrate_attribute(row)? {
            Some(attribute) => link.with_attribute(attribute),
            None => link,
        })
    }

    fn hydrate_attribute(&self, row: &Row) -> Result<Option<LinkAttribute>, AppError> {
        let Some(id) = row.opt_i64(columns::LINK_ATTRIBUTE_ID)? else {
            return Ok(None);
        };

        let mut attribute = LinkAttribute::new(id);
        for (name, value) in row.with_prefix(columns::LINK_ATTRIBUTE_PREFIX) {
            if !ATTRIBUTE_KEY_COLUMNS.contains(&name) {
                attribute.values.insert(name.to_string(), value.clone());
            }
        }

        Ok(Some(attribute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn link_row(id: i64, product_id: i64) -> Row {
        Row::new()
            .with(columns::LINK_ID, id)
            .with(columns::LINK_PRODUCT_ID, product_id)
            .with(columns::LINK_LABEL, "Manufacturer page")
            .with(columns::LINK_URL, "https://example.com")
            .with(columns::LINK_TARGET, "_blank")
    }

    #[test]
    fn test_hydrate_without_attribute_columns() {
        let link = LinkHydrator::new().hydrate(&link_row(1, 10)).unwrap();

        assert_eq!(link.id, 1);
        assert_eq!(link.product_id, 10);
        assert_eq!(link.label, "Manufacturer page");
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.target, "_blank");
        assert!(link.attribute.is_none());
    }

    #[test]
    fn test_hydrate_with_unmatched_outer_join() {
        let row = link_row(1, 10)
            .with(columns::LINK_ATTRIBUTE_ID, Value::Null)
            .with("__linkattribute_information_id", Value::Null)
            .with("__linkattribute_attr1", Value::Null);

        let link = LinkHydrator::new().hydrate(&row).unwrap();

        assert!(link.attribute.is_none());
    }

    #[test]
    fn test_hydrate_with_attribute() {
        let row = link_row(1, 10)
            .with(columns::LINK_ATTRIBUTE_ID, 5)
            .with("__linkattribute_information_id", 1)
            .with("__linkattribute_attr1", "download")
            .with("__linkattribute_attr2", Value::Null);

        let link = LinkHydrator::new().hydrate(&row).unwrap();
        let attribute = link.attribute.unwrap();

        assert_eq!(attribute.id, 5);
        assert_eq!(attribute.values.len(), 2);
        assert_eq!(attribute.get("attr1"), Some(&json!("download")));
        assert!(attribute.get("attr2").is_none());
        assert!(!attribute.values.contains_key("information_id"));
    }

    #[test]
    fn test_missing_required_column_fails() {
        let row = Row::new()
            .with(columns::LINK_ID, 1)
            .with(columns::LINK_PRODUCT_ID, 10)
            .with(columns::LINK_URL, "https://example.com")
            .with(columns::LINK_TARGET, "_blank");

        let err = LinkHydrator::new().hydrate(&row).unwrap_err();

        assert!(matches!(err, AppError::Hydration { .. }));
        assert_eq!(err.details()["column"], columns::LINK_LABEL);
    }
}
