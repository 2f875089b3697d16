//! Store Object - data access layer for LightBnB
//!
//! Parameterized statement builders, the property search query, the row
//! types of the schema and the PostgreSQL stores that execute them.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod models;
pub mod prelude;
pub mod property_query;
pub mod query_builder;
pub mod stores;
pub mod traits;

pub use errors::StoreError;
pub use models::{NewProperty, NewUser, Property, PropertyListing, ReservationListing, User};
pub use property_query::{
    build_property_query, build_property_query_with, PropertyFilter, DEFAULT_LIMIT,
};
pub use query_builder::{BindValue, QueryBuilder, QueryFilter, SortOrder, Statement};
pub use stores::{PropertyStore, ReservationStore, UserStore};
pub use traits::*;

use sqlx::PgPool;

pub type DbPool = PgPool;
