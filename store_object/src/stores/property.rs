use super::executor::{fetch_all, fetch_one, validate_limit};
use crate::errors::StoreError;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::property_query::{build_property_query_with, PropertyFilter};
use crate::query_builder::{InsertBuilder, Statement};
use crate::traits::PropertyRepository;
use crate::DbPool;
use async_trait::async_trait;
use config::CityMatch;

const TABLE: &str = "properties";

/// PostgreSQL-backed [`PropertyRepository`]
#[derive(Debug, Clone)]
pub struct PropertyStore {
    db_pool: DbPool,
    city_match: CityMatch,
}

impl PropertyStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            db_pool,
            city_match: CityMatch::default(),
        }
    }

    /// Use the given comparison for the city criterion
    pub fn with_city_match(mut self, city_match: CityMatch) -> Self {
        self.city_match = city_match;
        self
    }

    pub fn city_match(&self) -> CityMatch {
        self.city_match
    }

    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }

    pub(crate) fn insert_statement(property: NewProperty) -> Statement {
        let mut insert = InsertBuilder::into_table(TABLE)
            .set("owner_id", property.owner_id)
            .set("title", property.title);

        // Omitted column falls back to NULL
        if let Some(description) = property.description {
            insert = insert.set("description", description);
        }

        insert
            .set("thumbnail_photo_url", property.thumbnail_photo_url)
            .set("cover_photo_url", property.cover_photo_url)
            .set("cost_per_night", property.cost_per_night)
            .set("parking_spaces", property.parking_spaces)
            .set("number_of_bathrooms", property.number_of_bathrooms)
            .set("number_of_bedrooms", property.number_of_bedrooms)
            .set("country", property.country)
            .set("street", property.street)
            .set("city", property.city)
            .set("province", property.province)
            .set("post_code", property.post_code)
            .build()
    }
}

#[async_trait]
impl PropertyRepository for PropertyStore {
    async fn get_all_properties(
        &self,
        filter: &PropertyFilter,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, StoreError> {
        validate_limit(limit)?;

        let statement = build_property_query_with(filter, limit, self.city_match);
        fetch_all(&self.db_pool, TABLE, "get_all_properties", &statement).await
    }

    async fn add_property(&self, property: NewProperty) -> Result<Property, StoreError> {
        let statement = Self::insert_statement(property);
        fetch_one(&self.db_pool, TABLE, "add_property", &statement).await
    }
}
