//! Integration tests against a live PostgreSQL database
//!
//! Set DATABASE_URL to run them; without it each test returns early. The
//! scenarios share one schema, so they run sequentially inside a single test.

use chrono::NaiveDate;
use lightbnb::prelude::*;

async fn setup() -> Option<LightBnb> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping integration test");
            return None;
        }
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let lightbnb = LightBnb::with_pool(pool, ListingConfig::default());
    lightbnb.migrate(true).await.expect("Failed to migrate schema");
    Some(lightbnb)
}

fn new_property(owner_id: i32, title: &str, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: title.to_string(),
        description: Some(format!("{} description", title)),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://images.example.com/cover.jpg".to_string(),
        cost_per_night,
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
        country: "Canada".to_string(),
        street: "1 Main Street".to_string(),
        city: city.to_string(),
        province: "British Columbia".to_string(),
        post_code: "V5K 0A1".to_string(),
    }
}

async fn add_review(lightbnb: &LightBnb, property_id: i32, rating: i16) {
    sqlx::query("INSERT INTO property_reviews (property_id, rating) VALUES ($1, $2)")
        .bind(property_id)
        .bind(rating)
        .execute(lightbnb.pool())
        .await
        .expect("Failed to insert review");
}

async fn add_reservation(
    lightbnb: &LightBnb,
    guest_id: i32,
    property_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) {
    sqlx::query(
        "INSERT INTO reservations (guest_id, property_id, start_date, end_date) VALUES ($1, $2, $3, $4)",
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(start_date)
    .bind(end_date)
    .execute(lightbnb.pool())
    .await
    .expect("Failed to insert reservation");
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn test_lightbnb_store_scenarios() {
    let Some(lightbnb) = setup().await else {
        return;
    };

    lightbnb.health_check().await.unwrap();

    // ========================================
    // Users
    // ========================================

    let users = lightbnb.users();
    let owner = users
        .add_user(NewUser {
            name: "Devin Sanders".to_string(),
            email: "Devin.Sanders@Example.com".to_string(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(owner.email, "devin.sanders@example.com");

    let guest = users
        .add_user(NewUser {
            name: "Sue Luna".to_string(),
            email: "sue@example.com".to_string(),
            password: "hash".to_string(),
        })
        .await
        .unwrap();

    let found = users
        .get_user_with_email("DEVIN.SANDERS@example.com")
        .await
        .unwrap();
    assert_eq!(found, Some(owner.clone()));

    let by_id = users.get_user_with_id(guest.id).await.unwrap();
    assert_eq!(by_id.map(|u| u.name), Some("Sue Luna".to_string()));

    assert_eq!(users.get_user_with_email("nobody@example.com").await.unwrap(), None);
    assert_eq!(users.get_user_with_id(-1).await.unwrap(), None);

    // Duplicate email violates the unique constraint: an error, not an empty result
    let duplicate = users
        .add_user(NewUser {
            name: "Imposter".to_string(),
            email: "sue@example.com".to_string(),
            password: "hash".to_string(),
        })
        .await;
    assert!(matches!(duplicate, Err(StoreError::Database { .. })));

    // ========================================
    // Properties
    // ========================================

    let properties = lightbnb.properties();
    let cheap = properties
        .add_property(new_property(owner.id, "Cheap loft", "Vancouver", 4500))
        .await
        .unwrap();
    let mid = properties
        .add_property(new_property(owner.id, "Mid house", "North Vancouver", 9000))
        .await
        .unwrap();
    let pricey = properties
        .add_property(new_property(guest.id, "Pricey villa", "Victoria", 30000))
        .await
        .unwrap();
    let unreviewed = properties
        .add_property(new_property(guest.id, "New cabin", "Vancouver", 12000))
        .await
        .unwrap();

    add_review(&lightbnb, cheap.id, 3).await;
    add_review(&lightbnb, cheap.id, 4).await;
    add_review(&lightbnb, mid.id, 5).await;
    add_review(&lightbnb, pricey.id, 2).await;

    // Everything, cheapest first, unreviewed property included with no rating
    let all = properties
        .get_all_properties(&PropertyFilter::new(), 10)
        .await
        .unwrap();
    let titles: Vec<&str> = all.iter().map(|l| l.property.title.as_str()).collect();
    assert_eq!(titles, vec!["Cheap loft", "Mid house", "New cabin", "Pricey villa"]);
    assert_eq!(all[0].average_rating, Some(3.5));
    assert_eq!(all[2].property.id, unreviewed.id);
    assert_eq!(all[2].average_rating, None);

    // City substring
    let vancouver = properties
        .get_all_properties(&PropertyFilter::new().city("Vancouver"), 10)
        .await
        .unwrap();
    assert_eq!(vancouver.len(), 3);

    // Default LIKE is case sensitive, ILIKE is not
    let lower = properties
        .get_all_properties(&PropertyFilter::new().city("vancouver"), 10)
        .await
        .unwrap();
    assert!(lower.is_empty());
    let insensitive = properties
        .clone()
        .with_city_match(CityMatch::CaseInsensitive)
        .get_all_properties(&PropertyFilter::new().city("vancouver"), 10)
        .await
        .unwrap();
    assert_eq!(insensitive.len(), 3);

    // Owner
    let owned = properties
        .get_all_properties(&PropertyFilter::new().owner_id(guest.id), 10)
        .await
        .unwrap();
    assert_eq!(owned.len(), 2);

    // Dollars in, cents compared
    let ranged = properties
        .get_all_properties(
            &PropertyFilter::new()
                .minimum_price_per_night(50.0)
                .maximum_price_per_night(150.0),
            10,
        )
        .await
        .unwrap();
    let ranged_titles: Vec<&str> = ranged.iter().map(|l| l.property.title.as_str()).collect();
    assert_eq!(ranged_titles, vec!["Mid house", "New cabin"]);

    // Rating floor drops unreviewed properties
    let rated = properties
        .get_all_properties(&PropertyFilter::new().minimum_rating(3.0), 10)
        .await
        .unwrap();
    let rated_titles: Vec<&str> = rated.iter().map(|l| l.property.title.as_str()).collect();
    assert_eq!(rated_titles, vec!["Cheap loft", "Mid house"]);

    // Limit
    let limited = properties
        .get_all_properties(&PropertyFilter::new(), 2)
        .await
        .unwrap();
    assert_eq!(limited.len(), 2);

    let invalid = properties.get_all_properties(&PropertyFilter::new(), 0).await;
    assert!(matches!(invalid, Err(StoreError::Validation(_))));

    let listed = lightbnb
        .search_properties(&PropertyFilter::new().city("Victoria"))
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].property, pricey);

    // ========================================
    // Reservations
    // ========================================

    add_reservation(&lightbnb, guest.id, mid.id, date(2026, 7, 1), date(2026, 7, 4)).await;
    add_reservation(&lightbnb, guest.id, cheap.id, date(2026, 3, 10), date(2026, 3, 12)).await;
    add_reservation(&lightbnb, owner.id, pricey.id, date(2026, 5, 1), date(2026, 5, 2)).await;

    let reservations = lightbnb
        .reservations()
        .get_all_reservations(guest.id, 10)
        .await
        .unwrap();
    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].property.id, cheap.id);
    assert_eq!(reservations[0].start_date, date(2026, 3, 10));
    assert_eq!(reservations[0].average_rating, Some(3.5));
    assert_eq!(reservations[1].property.title, "Mid house");
    assert!(reservations.iter().all(|r| r.guest_id == guest.id));

    let none = lightbnb.guest_reservations(-1).await.unwrap();
    assert!(none.is_empty());
}
