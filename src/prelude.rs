//! Convenience re-exports for common LightBnB usage
//!
//! # Example
//!
//! ```rust
//! use lightbnb::prelude::*;
//!
//! let statement = build_property_query(&PropertyFilter::new().city("van"), DEFAULT_LIMIT);
//! assert_eq!(statement.values.len(), 2);
//! ```

pub use crate::core::LightBnb;
pub use crate::errors::LightBnbError;

pub use config::{AppConfig, CityMatch, DatabaseConfig, ListingConfig};

pub use store_object::prelude::*;

pub use sqlx;
pub use tokio;
