//! Property search statement
//!
//! Builds the listing query: every property with the average of its review
//! ratings, narrowed by the optional criteria of a [`PropertyFilter`].
//! Criteria are appended in a fixed order (city, owner, minimum price,
//! maximum price) so the placeholder numbering is deterministic; the rating
//! floor is a HAVING condition and the limit is always bound last.

use crate::debug_log;
use crate::query_builder::{
    AggregateFunction, GroupBy, JoinClause, QueryBuilder, QueryFilter, SelectField, SortOrder,
    Statement,
};
use config::CityMatch;
use serde::{Deserialize, Serialize};

/// Row cap used when the caller does not supply one
pub const DEFAULT_LIMIT: i64 = 10;

const RATING_COLUMN: &str = "property_reviews.rating";

/// Optional search criteria. Prices are in dollars; the table stores cents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Substring of the city name
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn minimum_price_per_night(mut self, dollars: f64) -> Self {
        self.minimum_price_per_night = Some(dollars);
        self
    }

    pub fn maximum_price_per_night(mut self, dollars: f64) -> Self {
        self.maximum_price_per_night = Some(dollars);
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }
}

/// Convert a dollar amount to whole cents
pub fn dollars_to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

// Blank strings, zeroes and NaN count as not supplied
fn present_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn present_number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Build the property search with the default case-sensitive city match
pub fn build_property_query(filter: &PropertyFilter, limit: i64) -> Statement {
    build_property_query_with(filter, limit, CityMatch::default())
}

/// Build the property search statement.
///
/// The builder does not validate ranges; negative prices or a rating above
/// five are bound as given.
pub fn build_property_query_with(
    filter: &PropertyFilter,
    limit: i64,
    city_match: CityMatch,
) -> Statement {
    let mut query = QueryBuilder::from("properties")
        .select(SelectField::all_of("properties"))
        .select(
            SelectField::avg(RATING_COLUMN)
                .with_cast("float8")
                .with_alias("average_rating"),
        )
        .join(JoinClause::left(
            "property_reviews",
            "properties.id",
            "property_reviews.property_id",
        ));

    if let Some(city) = present_text(&filter.city) {
        let pattern = format!("%{}%", city);
        query = query.filter(match city_match {
            CityMatch::CaseSensitive => QueryFilter::like("city", &pattern),
            CityMatch::CaseInsensitive => QueryFilter::ilike("city", &pattern),
        });
    }

    if let Some(owner_id) = filter.owner_id.filter(|id| *id != 0) {
        query = query.filter(QueryFilter::eq("owner_id", owner_id));
    }

    if let Some(minimum) = present_number(filter.minimum_price_per_night) {
        query = query.filter(QueryFilter::gte("cost_per_night", dollars_to_cents(minimum)));
    }

    if let Some(maximum) = present_number(filter.maximum_price_per_night) {
        query = query.filter(QueryFilter::lte("cost_per_night", dollars_to_cents(maximum)));
    }

    query = query.group_by(GroupBy::single("properties.id"));

    if let Some(rating) = present_number(filter.minimum_rating) {
        let average = AggregateFunction::Avg.apply(Some(RATING_COLUMN));
        query = query.having(QueryFilter::gte(&average, rating));
    }

    let statement = query
        .order_by("cost_per_night", SortOrder::Asc)
        .limit(limit)
        .build();

    debug_log!(
        "property query: {} [{} bound values]",
        statement.sql,
        statement.values.len()
    );

    statement
}
