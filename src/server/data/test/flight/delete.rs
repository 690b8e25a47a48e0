use super::*;

/// Tests deleting a flight.
///
/// Expected: Ok(true) and the flight no longer exists
#[tokio::test]
async fn deletes_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;

    let deleted = FlightRepository::new(db).delete(flight.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Flight::find_by_id(flight.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a flight removes its flight numbers and favorites.
///
/// Expected: Ok(true) with no dependent rows left for the flight
#[tokio::test]
async fn deletes_dependent_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, flight, _favorite) =
        factory::helpers::create_favorite_with_dependencies(db).await?;
    factory::create_flight_number(db, flight.id).await?;
    let other_flight = factory::create_flight(db).await?;
    factory::create_flight_number(db, other_flight.id).await?;

    let deleted = FlightRepository::new(db).delete(flight.id).await?;
    assert!(deleted);

    let favorites = entity::prelude::Favorite::find()
        .filter(entity::favorite::Column::FlightId.eq(flight.id))
        .count(db)
        .await?;
    let numbers = entity::prelude::FlightNumber::find()
        .filter(entity::flight_number::Column::FlightId.eq(flight.id))
        .count(db)
        .await?;
    assert_eq!(favorites, 0);
    assert_eq!(numbers, 0);

    // Rows belonging to other flights are untouched
    let other_numbers = entity::prelude::FlightNumber::find()
        .filter(entity::flight_number::Column::FlightId.eq(other_flight.id))
        .count(db)
        .await?;
    assert_eq!(other_numbers, 1);

    Ok(())
}

/// Tests deleting a flight that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = FlightRepository::new(db).delete(7).await?;

    assert!(!deleted);

    Ok(())
}
