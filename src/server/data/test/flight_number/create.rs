use super::*;

/// Tests creating a flight number for an existing flight.
///
/// Expected: Ok with flight number linked to the flight
#[tokio::test]
async fn creates_flight_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;

    let number = FlightNumberRepository::new(db)
        .create(FlightNumberParams {
            aviacompany: "DL123".to_string(),
            flight_id: flight.id,
        })
        .await?;

    assert_eq!(number.aviacompany, "DL123");
    assert_eq!(number.flight_id, flight.id);

    Ok(())
}

/// Tests that the unique constraint on the code is enforced by the table.
///
/// Expected: Err on the second insert with the same code
#[tokio::test]
async fn fails_for_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let repo = FlightNumberRepository::new(db);

    repo.create(FlightNumberParams {
        aviacompany: "DL123".to_string(),
        flight_id: flight.id,
    })
    .await?;

    let duplicate = repo
        .create(FlightNumberParams {
            aviacompany: "DL123".to_string(),
            flight_id: flight.id,
        })
        .await;

    assert!(duplicate.is_err());

    Ok(())
}
