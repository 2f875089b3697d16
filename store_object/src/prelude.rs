//! Convenience re-exports for common store-object usage

// Repository traits
pub use crate::traits::{PropertyRepository, ReservationRepository, UserRepository};

// Error types
pub use crate::errors::StoreError;

// Stores
pub use crate::stores::{PropertyStore, ReservationStore, UserStore};

// Records
pub use crate::models::{NewProperty, NewUser, Property, PropertyListing, ReservationListing, User};

// Query building
pub use crate::property_query::{build_property_query, PropertyFilter, DEFAULT_LIMIT};
pub use crate::query_builder::{BindValue, QueryBuilder, QueryFilter, SortOrder, Statement};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use sqlx::PgPool;
