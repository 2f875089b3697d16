//! Core LightBnB functionality
//!
//! [`LightBnb`] owns the connection pool and hands out stores that share it.

use sqlx::PgPool;
use std::time::Duration;
use store_object::prelude::*;

use crate::errors::LightBnbError;
use config::{AppConfig, DatabaseConfig, ListingConfig};

/// Main coordinator holding the pool and listing settings
#[derive(Debug, Clone)]
pub struct LightBnb {
    pool: PgPool,
    listing: ListingConfig,
}

impl LightBnb {
    /// Connect with default listing settings
    pub async fn new(config: DatabaseConfig) -> Result<Self, LightBnbError> {
        config.validate()?;
        let pool = Self::connect(&config).await?;
        Ok(Self::with_pool(pool, ListingConfig::default()))
    }

    /// Connect using a complete application configuration
    pub async fn from_config(config: AppConfig) -> Result<Self, LightBnbError> {
        config.validate()?;
        let pool = Self::connect(&config.database).await?;
        Ok(Self::with_pool(pool, config.listing))
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: PgPool, listing: ListingConfig) -> Self {
        Self { pool, listing }
    }

    async fn connect(config: &DatabaseConfig) -> Result<PgPool, LightBnbError> {
        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&config.connection_string()).await?;

        tracing::info!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "connected to database"
        );

        Ok(pool)
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn listing(&self) -> &ListingConfig {
        &self.listing
    }

    pub fn users(&self) -> UserStore {
        UserStore::new(self.pool.clone())
    }

    /// Property store using the configured city comparison
    pub fn properties(&self) -> PropertyStore {
        PropertyStore::new(self.pool.clone()).with_city_match(self.listing.city_match)
    }

    pub fn reservations(&self) -> ReservationStore {
        ReservationStore::new(self.pool.clone())
    }

    /// Search properties with the configured default row cap
    pub async fn search_properties(
        &self,
        filter: &PropertyFilter,
    ) -> Result<Vec<PropertyListing>, LightBnbError> {
        let listings = self
            .properties()
            .get_all_properties(filter, self.listing.default_limit)
            .await?;
        Ok(listings)
    }

    /// A guest's reservations with the configured default row cap
    pub async fn guest_reservations(
        &self,
        guest_id: i32,
    ) -> Result<Vec<ReservationListing>, LightBnbError> {
        let reservations = self
            .reservations()
            .get_all_reservations(guest_id, self.listing.default_limit)
            .await?;
        Ok(reservations)
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), LightBnbError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
