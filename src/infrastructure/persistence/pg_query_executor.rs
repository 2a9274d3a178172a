//! PostgreSQL implementation of the query executor.

use async_trait::async_trait;
use serde_json::{Value, json};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row as _, TypeInfo, ValueRef};
use std::sync::Arc;

use crate::domain::entities::ShopContext;
use crate::domain::query::{Param, Predicate, Row, SelectQuery};
use crate::domain::repositories::QueryExecutor;
use crate::error::AppError;

/// Executes gateway queries against PostgreSQL.
///
/// Queries are rendered to SQL with positional placeholders and every value
/// is bound, never interpolated. Identifiers (tables, columns, aliases) come
/// from the gateways and the field helper, not from request input.
pub struct PgQueryExecutor {
    pool: Arc<PgPool>,
}

impl PgQueryExecutor {
    /// Creates a new executor with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryExecutor for PgQueryExecutor {
    #[tracing::instrument(skip_all, fields(shop_id = context.shop_id, locale = %context.locale))]
    async fn fetch_all(
        &self,
        query: &SelectQuery,
        context: &ShopContext,
    ) -> Result<Vec<Row>, AppError> {
        let (sql, params) = render_select(query)?;
        tracing::debug!(sql = %sql, params = params.len(), "Executing query");

        let rows = bind_params(sqlx::query(&sql), params)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter().map(convert_row).collect()
    }
}

/// Renders a query to PostgreSQL SQL, returning the bound values in
/// placeholder order.
///
/// `IN` predicates render as `= ANY($n)` with the ids bound as one `BIGINT[]`.
///
/// # Errors
///
/// Returns [`AppError::Query`] if the query has no table or no columns.
pub fn render_select(query: &SelectQuery) -> Result<(String, Vec<Param>), AppError> {
    let Some((table, alias)) = &query.from else {
        return Err(AppError::query("Query has no FROM table", json!({})));
    };
    if query.columns.is_empty() {
        return Err(AppError::query(
            "Query selects no columns",
            json!({ "table": table }),
        ));
    }

    let mut sql = format!("SELECT {} FROM {table} {alias}", query.columns.join(", "));

    for join in &query.joins {
        sql.push_str(&format!(
            " {} {} {} ON {}",
            join.kind.as_sql(),
            join.table,
            join.alias,
            join.condition
        ));
    }

    let mut params = Vec::with_capacity(query.predicates.len());
    let mut conditions = Vec::with_capacity(query.predicates.len());
    for predicate in &query.predicates {
        params.push(predicate.param());
        let placeholder = params.len();
        conditions.push(match predicate {
            Predicate::Eq { column, .. } => format!("{column} = ${placeholder}"),
            Predicate::In { column, .. } => format!("{column} = ANY(${placeholder})"),
        });
    }
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    if !query.group_by.is_empty() {
        sql.push_str(" GROUP BY ");
        sql.push_str(&query.group_by.join(", "));
    }

    if !query.order_by.is_empty() {
        let terms: Vec<String> = query
            .order_by
            .iter()
            .map(|(column, direction)| format!("{column} {}", direction.as_sql()))
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&terms.join(", "));
    }

    Ok((sql, params))
}

fn bind_params(
    mut query: Query<'_, Postgres, PgArguments>,
    params: Vec<Param>,
) -> Query<'_, Postgres, PgArguments> {
    for param in params {
        query = match param {
            Param::Int(value) => query.bind(value),
            Param::Text(value) => query.bind(value),
            Param::IntList(ids) => query.bind(ids),
        };
    }
    query
}

fn convert_row(row: &PgRow) -> Result<Row, AppError> {
    let mut converted = Row::new();

    for (index, column) in row.columns().iter().enumerate() {
        converted.insert(column.name(), decode_column(row, index, column.name())?);
    }

    Ok(converted)
}

/// Decodes one column into a JSON value, mapping SQL NULL to `Value::Null`.
fn decode_column(row: &PgRow, index: usize, name: &str) -> Result<Value, AppError> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_string();

    let value = match type_name.as_str() {
        "INT2" => Value::from(row.try_get::<i16, _>(index)?),
        "INT4" => Value::from(row.try_get::<i32, _>(index)?),
        "INT8" => Value::from(row.try_get::<i64, _>(index)?),
        "FLOAT4" => Value::from(f64::from(row.try_get::<f32, _>(index)?)),
        "FLOAT8" => Value::from(row.try_get::<f64, _>(index)?),
        "BOOL" => Value::from(row.try_get::<bool, _>(index)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Value::from(row.try_get::<String, _>(index)?),
        "JSON" | "JSONB" => row.try_get::<Value, _>(index)?,
        other => {
            return Err(AppError::query(
                "Unsupported column type",
                json!({ "column": name, "type": other }),
            ));
        }
    };

    Ok(value)
}
