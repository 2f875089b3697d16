//! Traits for database operations
//!
//! One trait per aggregate of the schema. The PostgreSQL stores implement
//! them; callers that only need the behavior can take a `&dyn` trait object
//! and be tested against an in-memory double.

pub mod repositories;

pub use repositories::{PropertyRepository, ReservationRepository, UserRepository};
