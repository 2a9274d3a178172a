//! Product reference supplied by callers.

/// Identifies a product whose related data is being resolved.
///
/// Several references may share an `id` (variants listed separately, for
/// example); each keeps its own `number`, which is the key callers see in
/// resolver results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    pub id: i64,
    pub number: String,
}

impl ProductRef {
    pub fn new(id: i64, number: impl Into<String>) -> Self {
        Self {
            id,
            number: number.into(),
        }
    }
}
