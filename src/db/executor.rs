//! Statement execution against the relational store

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::Query,
    Column, PgPool, Postgres, Row as _, TypeInfo,
};

use crate::error::AppResult;

use super::statement::{Row, SqlValue, Statement};

/// Executes parameterized statements.
///
/// Managers only ever hold this trait object, so tests can substitute a mock
/// and production code hands in a [`PgExecutor`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// All rows produced by a `SELECT`
    async fn fetch_rows(&self, statement: Statement) -> AppResult<Vec<Row>>;

    /// The first column of the first row as bytes; `None` for no row or NULL
    async fn fetch_blob(&self, statement: Statement) -> AppResult<Option<Vec<u8>>>;

    /// Affected-row count of an `UPDATE`
    async fn execute(&self, statement: Statement) -> AppResult<u64>;

    /// Identifier produced by an `INSERT ... RETURNING id`
    async fn insert(&self, statement: Statement) -> AppResult<i64>;
}

/// Postgres-backed executor over a shared pool
#[derive(Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn fetch_rows(&self, statement: Statement) -> AppResult<Vec<Row>> {
        tracing::debug!(sql = %statement.sql, params = statement.params.len(), "fetch rows");
        let rows = bind_all(sqlx::query(&statement.sql), &statement.params)
            .fetch_all(&self.pool)
            .await?;

        let rows = rows.iter().map(decode_row).collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    async fn fetch_blob(&self, statement: Statement) -> AppResult<Option<Vec<u8>>> {
        tracing::debug!(sql = %statement.sql, "fetch blob");
        let row = bind_all(sqlx::query(&statement.sql), &statement.params)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(row.try_get::<Option<Vec<u8>>, _>(0)?),
            None => Ok(None),
        }
    }

    async fn execute(&self, statement: Statement) -> AppResult<u64> {
        tracing::debug!(sql = %statement.sql, params = statement.params.len(), "execute");
        let result = bind_all(sqlx::query(&statement.sql), &statement.params)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert(&self, statement: Statement) -> AppResult<i64> {
        tracing::debug!(sql = %statement.sql, params = statement.params.len(), "insert");
        let row = bind_all(sqlx::query(&statement.sql), &statement.params)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get::<i64, _>(0)?)
    }
}

fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlValue],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            SqlValue::SmallInt(v) => query.bind(*v),
            SqlValue::BigInt(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_deref()),
            SqlValue::Bytes(v) => query.bind(v.as_deref()),
            SqlValue::Date(v) => query.bind(*v),
            SqlValue::Timestamp(v) => query.bind(*v),
        };
    }
    query
}

/// Convert a driver row into an ordered JSON row. Binary columns are skipped;
/// images are only ever served through `fetch_blob`.
fn decode_row(row: &PgRow) -> Result<Row, sqlx::Error> {
    let mut out = Row::new();

    for column in row.columns() {
        let idx = column.ordinal();
        let value = match column.type_info().name() {
            "BYTEA" => continue,
            "INT2" => row.try_get::<Option<i16>, _>(idx)?.map(Value::from),
            "INT4" => row.try_get::<Option<i32>, _>(idx)?.map(Value::from),
            "INT8" => row.try_get::<Option<i64>, _>(idx)?.map(Value::from),
            "BOOL" => row.try_get::<Option<bool>, _>(idx)?.map(Value::from),
            "DATE" => row
                .try_get::<Option<NaiveDate>, _>(idx)?
                .map(|d| Value::from(d.format("%Y-%m-%d").to_string())),
            "TIMESTAMPTZ" => row
                .try_get::<Option<DateTime<Utc>>, _>(idx)?
                .map(|t| Value::from(t.to_rfc3339_opts(SecondsFormat::Millis, true))),
            "TIMESTAMP" => row
                .try_get::<Option<NaiveDateTime>, _>(idx)?
                .map(|t| Value::from(t.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))),
            _ => row.try_get::<Option<String>, _>(idx)?.map(Value::from),
        };
        out.push(column.name(), value.unwrap_or(Value::Null));
    }

    Ok(out)
}
