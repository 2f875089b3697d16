use super::executor::{fetch_all, validate_limit};
use crate::errors::StoreError;
use crate::models::ReservationListing;
use crate::query_builder::{
    GroupBy, JoinClause, QueryBuilder, QueryFilter, SelectField, SortOrder, Statement,
};
use crate::traits::ReservationRepository;
use crate::DbPool;
use async_trait::async_trait;

const TABLE: &str = "reservations";

/// PostgreSQL-backed [`ReservationRepository`]
#[derive(Debug, Clone)]
pub struct ReservationStore {
    db_pool: DbPool,
}

impl ReservationStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }

    /// Reservations of one guest with the reserved property and its average
    /// rating. Only reviewed properties join, so every row has a rating.
    pub(crate) fn guest_statement(guest_id: i32, limit: i64) -> Statement {
        QueryBuilder::from(TABLE)
            .select(SelectField::all_of("properties"))
            .select(SelectField::field_as("reservations.id", "reservation_id"))
            .select(SelectField::field("reservations.guest_id"))
            .select(SelectField::field("reservations.start_date"))
            .select(SelectField::field("reservations.end_date"))
            .select(
                SelectField::avg("property_reviews.rating")
                    .with_cast("float8")
                    .with_alias("average_rating"),
            )
            .join(JoinClause::inner(
                "properties",
                "reservations.property_id",
                "properties.id",
            ))
            .join(JoinClause::inner(
                "property_reviews",
                "properties.id",
                "property_reviews.property_id",
            ))
            .filter(QueryFilter::eq("reservations.guest_id", guest_id))
            .group_by(GroupBy::new(vec![
                "properties.id".to_string(),
                "reservations.id".to_string(),
            ]))
            .order_by("reservations.start_date", SortOrder::Asc)
            .limit(limit)
            .build()
    }
}

#[async_trait]
impl ReservationRepository for ReservationStore {
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<ReservationListing>, StoreError> {
        validate_limit(limit)?;

        let statement = Self::guest_statement(guest_id, limit);
        fetch_all(&self.db_pool, TABLE, "get_all_reservations", &statement).await
    }
}
