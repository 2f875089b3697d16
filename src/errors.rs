//! Error types for the LightBnB crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightBnbError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] store_object::StoreError),

    #[error("Migration failed at {step}: {source}")]
    Migration {
        step: String,
        #[source]
        source: sqlx::Error,
    },
}
