//! # LightBnB
//!
//! Data-access layer for a property rental application on PostgreSQL:
//! user accounts, property listings with their average review rating, and
//! guest reservations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lightbnb::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let lightbnb = LightBnb::from_config(config).await?;
//!     lightbnb.migrate(false).await?;
//!
//!     let filter = PropertyFilter::new()
//!         .city("Vancouver")
//!         .maximum_price_per_night(150.0)
//!         .minimum_rating(4.0);
//!
//!     for listing in lightbnb.search_properties(&filter).await? {
//!         println!(
//!             "{} ({:?})",
//!             listing.property.title, listing.average_rating
//!         );
//!     }
//!
//!     match lightbnb.users().get_user_with_email("guest@example.com").await? {
//!         Some(user) => println!("found {}", user.name),
//!         None => println!("no such user"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::LightBnb;
pub use crate::errors::LightBnbError;

// Re-export centralized config
pub use config::{AppConfig, CityMatch, DatabaseConfig, ListingConfig};

pub use store_object;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
