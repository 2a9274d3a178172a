//! Customer group entity.

/// A customer group such as "EK" (shop customers) or "H" (merchants).
///
/// Callers hand resolvers an `Arc<CustomerGroup>`; the same allocation is
/// shared by every discount that references it, so the group must not be
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerGroup {
    pub id: i64,
    pub key: String,
    pub name: String,
}

impl CustomerGroup {
    pub fn new(id: i64, key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            name: name.into(),
        }
    }
}
