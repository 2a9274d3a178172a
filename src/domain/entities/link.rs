//! Related link entity attached to a product.

use serde_json::Value;
use std::collections::BTreeMap;

/// A related link shown on a product detail page.
///
/// `attribute` holds the optional row from the link attribute table; it is
/// `None` when no attribute row exists for the link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub id: i64,
    pub product_id: i64,
    pub label: String,
    pub url: String,
    pub target: String,
    pub attribute: Option<LinkAttribute>,
}

impl LinkRecord {
    /// Creates a link without attributes.
    pub fn new(
        id: i64,
        product_id: i64,
        label: impl Into<String>,
        url: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id,
            product_id,
            label: label.into(),
            url: url.into(),
            target: target.into(),
            attribute: None,
        }
    }

    pub fn with_attribute(mut self, attribute: LinkAttribute) -> Self {
        self.attribute = Some(attribute);
        self
    }
}

/// Free-form attribute columns of a link, keyed by column name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinkAttribute {
    pub id: i64,
    pub values: BTreeMap<String, Value>,
}

impl LinkAttribute {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            values: BTreeMap::new(),
        }
    }

    /// Returns the attribute value, treating SQL NULL as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_creation() {
        let link = LinkRecord::new(1, 10, "Manual", "https://example.com/manual.pdf", "_blank");

        assert_eq!(link.id, 1);
        assert_eq!(link.product_id, 10);
        assert_eq!(link.label, "Manual");
        assert!(link.attribute.is_none());
        assert_eq!(link.target, "_blank");
    }

    #[test]
    fn test_link_with_attribute() {
        let mut attribute = LinkAttribute::new(3);
        attribute.values.insert("attr1".to_string(), json!("pdf"));
        attribute.values.insert("attr2".to_string(), Value::Null);

        let link =
            LinkRecord::new(1, 10, "Manual", "https://example.com", "_parent").with_attribute(attribute);

        let attribute = link.attribute.as_ref().unwrap();
        assert_eq!(attribute.get("attr1"), Some(&json!("pdf")));
        assert!(attribute.get("attr2").is_none());
        assert!(attribute.get("missing").is_none());
    }
}
