//! Statement execution shared by the stores

use crate::errors::StoreError;
use crate::query_builder::Statement;
use crate::{trace_log, DbPool};
use sqlx::postgres::PgRow;

fn prepare(statement: &Statement) -> Result<sqlx::postgres::PgArguments, StoreError> {
    debug_assert!(
        statement.has_contiguous_placeholders(),
        "placeholders out of step with bound values: {}",
        statement.sql
    );
    trace_log!("executing: {} with {:?}", statement.sql, statement.values);

    statement.arguments()
}

/// Run a statement expected to return at most one row
pub(crate) async fn fetch_optional<T>(
    pool: &DbPool,
    table: &str,
    operation: &str,
    statement: &Statement,
) -> Result<Option<T>, StoreError>
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let arguments = prepare(statement)?;

    sqlx::query_as_with::<_, T, _>(&statement.sql, arguments)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::database_operation(table, operation, e))
}

/// Run a statement that must return exactly one row (`INSERT ... RETURNING`)
pub(crate) async fn fetch_one<T>(
    pool: &DbPool,
    table: &str,
    operation: &str,
    statement: &Statement,
) -> Result<T, StoreError>
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let arguments = prepare(statement)?;

    sqlx::query_as_with::<_, T, _>(&statement.sql, arguments)
        .fetch_one(pool)
        .await
        .map_err(|e| StoreError::database_operation(table, operation, e))
}

pub(crate) async fn fetch_all<T>(
    pool: &DbPool,
    table: &str,
    operation: &str,
    statement: &Statement,
) -> Result<Vec<T>, StoreError>
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let arguments = prepare(statement)?;

    sqlx::query_as_with::<_, T, _>(&statement.sql, arguments)
        .fetch_all(pool)
        .await
        .map_err(|e| StoreError::database_operation(table, operation, e))
}

/// Row caps must be positive
pub(crate) fn validate_limit(limit: i64) -> Result<(), StoreError> {
    if limit <= 0 {
        return Err(StoreError::Validation(format!(
            "limit must be greater than 0, got {}",
            limit
        )));
    }
    Ok(())
}
