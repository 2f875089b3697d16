//! Database migration functionality
//!
//! Creates the LightBnB schema and the indexes the listing and reservation
//! queries filter on.

use crate::core::LightBnb;
use crate::errors::LightBnbError;

/// Table definitions in dependency order
const TABLES: &[(&str, &str)] = &[
    (
        "users",
        "CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY NOT NULL,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password VARCHAR(255) NOT NULL
        )",
    ),
    (
        "properties",
        "CREATE TABLE IF NOT EXISTS properties (
            id SERIAL PRIMARY KEY NOT NULL,
            owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title VARCHAR(255) NOT NULL,
            description TEXT,
            thumbnail_photo_url VARCHAR(255) NOT NULL,
            cover_photo_url VARCHAR(255) NOT NULL,
            cost_per_night INTEGER NOT NULL DEFAULT 0,
            parking_spaces INTEGER NOT NULL DEFAULT 0,
            number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
            number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
            country VARCHAR(255) NOT NULL,
            street VARCHAR(255) NOT NULL,
            city VARCHAR(255) NOT NULL,
            province VARCHAR(255) NOT NULL,
            post_code VARCHAR(255) NOT NULL
        )",
    ),
    (
        "reservations",
        "CREATE TABLE IF NOT EXISTS reservations (
            id SERIAL PRIMARY KEY NOT NULL,
            guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL
        )",
    ),
    (
        "property_reviews",
        "CREATE TABLE IF NOT EXISTS property_reviews (
            id SERIAL PRIMARY KEY NOT NULL,
            property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
            rating SMALLINT NOT NULL DEFAULT 0
        )",
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_properties_city ON properties (city)",
    "CREATE INDEX IF NOT EXISTS idx_properties_owner_id ON properties (owner_id)",
    "CREATE INDEX IF NOT EXISTS idx_reservations_guest_id ON reservations (guest_id)",
    "CREATE INDEX IF NOT EXISTS idx_property_reviews_property_id ON property_reviews (property_id)",
];

/// DROP statements, reverse dependency order
pub fn drop_table_sql() -> Vec<String> {
    TABLES
        .iter()
        .rev()
        .map(|(table, _)| format!("DROP TABLE IF EXISTS {} CASCADE", table))
        .collect()
}

/// CREATE TABLE then CREATE INDEX statements
pub fn create_schema_sql() -> Vec<&'static str> {
    TABLES
        .iter()
        .map(|(_, sql)| *sql)
        .chain(INDEXES.iter().copied())
        .collect()
}

impl LightBnb {
    /// Create tables and indexes.
    /// If recreate is true, drops existing tables first
    pub async fn migrate(&self, recreate: bool) -> Result<(), LightBnbError> {
        if recreate {
            for drop_sql in drop_table_sql() {
                tracing::info!(sql = %drop_sql, "dropping table");
                self.execute_step(&drop_sql).await?;
            }
        }

        for sql in create_schema_sql() {
            tracing::info!(sql = %sql, "applying schema");
            self.execute_step(sql).await?;
        }

        Ok(())
    }

    async fn execute_step(&self, sql: &str) -> Result<(), LightBnbError> {
        sqlx::query(sql)
            .execute(self.pool())
            .await
            .map_err(|source| LightBnbError::Migration {
                step: sql.lines().next().unwrap_or(sql).trim().to_string(),
                source,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_order_is_reverse_of_create() {
        assert_eq!(
            drop_table_sql(),
            vec![
                "DROP TABLE IF EXISTS property_reviews CASCADE",
                "DROP TABLE IF EXISTS reservations CASCADE",
                "DROP TABLE IF EXISTS properties CASCADE",
                "DROP TABLE IF EXISTS users CASCADE",
            ]
        );
    }

    #[test]
    fn test_schema_creates_tables_before_indexes() {
        let statements = create_schema_sql();

        assert_eq!(statements.len(), 8);
        assert!(statements[..4]
            .iter()
            .all(|sql| sql.starts_with("CREATE TABLE IF NOT EXISTS")));
        assert!(statements[4..]
            .iter()
            .all(|sql| sql.starts_with("CREATE INDEX IF NOT EXISTS")));
    }

    #[test]
    fn test_schema_has_every_listing_column() {
        let properties = TABLES
            .iter()
            .find(|(table, _)| *table == "properties")
            .map(|(_, sql)| *sql)
            .unwrap();

        for column in [
            "owner_id",
            "title",
            "description",
            "thumbnail_photo_url",
            "cover_photo_url",
            "cost_per_night",
            "parking_spaces",
            "number_of_bathrooms",
            "number_of_bedrooms",
            "country",
            "street",
            "city",
            "province",
            "post_code",
        ] {
            assert!(properties.contains(column), "missing column {}", column);
        }
    }
}
