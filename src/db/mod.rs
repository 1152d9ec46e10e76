//! Database module
//!
//! This module handles database connections, migrations, statement building
//! and execution.

pub mod connection;
pub mod executor;
pub mod statement;

use sqlx::PgPool;

pub use connection::*;
pub use executor::{PgExecutor, QueryExecutor};
pub use statement::{InsertBuilder, Row, RowScope, SqlValue, Statement, UpdateBuilder};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
