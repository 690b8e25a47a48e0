use super::*;

/// Tests creating a flight.
///
/// Verifies that the repository inserts the flight with the given fields and
/// sets both timestamps.
///
/// Expected: Ok with flight created
#[tokio::test]
async fn creates_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let flight = repo
        .create(CreateFlightParams {
            airport_arrival: "JFK".to_string(),
            airport_departure: "LAX".to_string(),
            aviacompany: "Delta".to_string(),
        })
        .await?;

    assert_eq!(flight.airport_arrival, "JFK");
    assert_eq!(flight.airport_departure, "LAX");
    assert_eq!(flight.aviacompany, "Delta");
    assert_eq!(flight.created_at, flight.updated_at);

    let db_flight = entity::prelude::Flight::find_by_id(flight.id).one(db).await?;
    assert!(db_flight.is_some());

    Ok(())
}

/// Tests that each created flight receives a distinct ID.
///
/// Expected: Ok with increasing IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let params = CreateFlightParams {
        airport_arrival: "SVO".to_string(),
        airport_departure: "LED".to_string(),
        aviacompany: "Aeroflot".to_string(),
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert!(second.id > first.id);

    Ok(())
}
