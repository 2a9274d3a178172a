//! Query execution seam used by the gateways.

use crate::domain::entities::ShopContext;
use crate::domain::query::{Row, SelectQuery};
use crate::error::AppError;
use async_trait::async_trait;

/// Runs a [`SelectQuery`] and returns its rows.
///
/// Implementations must be safe to share between concurrent requests; the
/// gateways hold them behind an `Arc` and never synchronise calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgQueryExecutor`] - PostgreSQL via SQLx
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Executes the query within the scope of `context`.
    ///
    /// Rows are returned in the order produced by the database. Absent
    /// results are an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on connectivity or SQL errors and
    /// [`AppError::Query`] when a result column cannot be represented.
    async fn fetch_all(
        &self,
        query: &SelectQuery,
        context: &ShopContext,
    ) -> Result<Vec<Row>, AppError>;
}
