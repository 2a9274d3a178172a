//! Request-scoped shop context.

/// Shop scope threaded through resolver calls to the query executor.
///
/// Resolvers never inspect it; executors may use it for scoping or tracing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopContext {
    pub shop_id: i64,
    pub locale: String,
    pub currency: String,
}

impl ShopContext {
    pub fn new(shop_id: i64, locale: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            shop_id,
            locale: locale.into(),
            currency: currency.into(),
        }
    }
}

impl Default for ShopContext {
    fn default() -> Self {
        Self::new(1, "en_GB", "EUR")
    }
}
