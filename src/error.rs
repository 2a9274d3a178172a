//! Error types shared by the gateways.
//!
//! Two families matter to callers:
//!
//! - infrastructure failures ([`AppError::Database`], [`AppError::Query`]) coming
//!   from the query executor, passed through untouched
//! - hydration failures ([`AppError::Hydration`]) raised when a row misses a
//!   required column or carries a value of the wrong type
//!
//! Empty results are never errors; resolvers return empty maps instead.

use serde_json::Value;

static NO_DETAILS: Value = Value::Null;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("query error: {message}")]
    Query { message: String, details: Value },

    #[error("hydration error: {message}")]
    Hydration { message: String, details: Value },
}

impl AppError {
    pub fn query(message: impl Into<String>, details: Value) -> Self {
        Self::Query {
            message: message.into(),
            details,
        }
    }

    pub fn hydration(message: impl Into<String>, details: Value) -> Self {
        Self::Hydration {
            message: message.into(),
            details,
        }
    }

    /// Returns true for failures raised below the gateways (connectivity,
    /// malformed SQL, unsupported column types).
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, AppError::Database(_) | AppError::Query { .. })
    }

    /// Structured context attached to the error, `Value::Null` for database errors.
    pub fn details(&self) -> &Value {
        match self {
            AppError::Database(_) => &NO_DETAILS,
            AppError::Query { details, .. } | AppError::Hydration { details, .. } => details,
        }
    }
}
