use crate::errors::StoreError;
use crate::models::{NewProperty, NewUser, Property, PropertyListing, ReservationListing, User};
use crate::property_query::PropertyFilter;
use async_trait::async_trait;

/// Account lookups and registration
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email, compared lower-cased. `Ok(None)` when absent.
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Find a user by id. `Ok(None)` when absent.
    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError>;

    /// Store a new user and return the stored row
    async fn add_user(&self, user: NewUser) -> Result<User, StoreError>;
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Search properties, cheapest first, with their average rating
    async fn get_all_properties(
        &self,
        filter: &PropertyFilter,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, StoreError>;

    async fn add_property(&self, property: NewProperty) -> Result<Property, StoreError>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// A guest's reservations, earliest start date first
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<ReservationListing>, StoreError>;
}
