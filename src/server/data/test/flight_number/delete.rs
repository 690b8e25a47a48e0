use super::*;

/// Tests deleting a flight number leaves its flight in place.
///
/// Expected: Ok(true), then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_flight_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight, number) = factory::helpers::create_flight_number_with_dependencies(db).await?;
    let repo = FlightNumberRepository::new(db);

    assert!(repo.delete(number.id).await?);
    assert!(!repo.delete(number.id).await?);

    assert!(entity::prelude::Flight::find_by_id(flight.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
