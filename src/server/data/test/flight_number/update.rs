use super::*;

/// Tests replacing both fields of a flight number.
///
/// Expected: Ok(Some) with new code and flight
#[tokio::test]
async fn replaces_code_and_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, number) = factory::helpers::create_flight_number_with_dependencies(db).await?;
    let other_flight = factory::create_flight(db).await?;

    let updated = FlightNumberRepository::new(db)
        .update(
            number.id,
            FlightNumberParams {
                aviacompany: "UA900".to_string(),
                flight_id: other_flight.id,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.aviacompany, "UA900");
    assert_eq!(updated.flight_id, other_flight.id);

    let stored = entity::prelude::FlightNumber::find_by_id(number.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.aviacompany, "UA900");

    Ok(())
}

/// Tests updating a flight number that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_flight_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;

    let result = FlightNumberRepository::new(db)
        .update(
            99,
            FlightNumberParams {
                aviacompany: "DL1".to_string(),
                flight_id: flight.id,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
