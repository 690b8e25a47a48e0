use super::*;

/// Tests a partial update only changes the provided fields.
///
/// Expected: Ok(Some) with aviacompany changed and airports untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;

    let updated = FlightRepository::new(db)
        .update(
            flight.id,
            UpdateFlightParams {
                aviacompany: Some("United".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.aviacompany, "United");
    assert_eq!(updated.airport_arrival, flight.airport_arrival);
    assert_eq!(updated.airport_departure, flight.airport_departure);
    assert!(updated.updated_at >= flight.updated_at);
    assert_eq!(updated.created_at, flight.created_at);

    Ok(())
}

/// Tests updating a flight that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FlightRepository::new(db)
        .update(42, UpdateFlightParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
