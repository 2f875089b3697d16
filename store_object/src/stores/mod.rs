//! PostgreSQL store implementations
//!
//! Each store owns a clone of the injected pool; cloning a `PgPool` shares
//! the underlying connections.

mod executor;
pub mod property;
pub mod reservation;
pub mod user;

pub use property::PropertyStore;
pub use reservation::ReservationStore;
pub use user::UserStore;
