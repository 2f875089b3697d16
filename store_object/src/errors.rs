use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error on {table} during {operation}: {message}")]
    Database {
        table: String,
        operation: String,
        message: String,
    },

    #[error("Failed to bind query parameter: {0}")]
    Bind(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl StoreError {
    /// Wrap a failed database call, logging it on the way out
    pub fn database_operation(table: &str, operation: &str, error: sqlx::Error) -> Self {
        tracing::error!(table, operation, error = %error, "database operation failed");

        StoreError::Database {
            table: table.to_string(),
            operation: operation.to_string(),
            message: error.to_string(),
        }
    }
}
