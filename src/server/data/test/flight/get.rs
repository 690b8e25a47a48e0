use super::*;

/// Tests listing flights returns every flight in ID order.
///
/// Expected: Ok with both flights, first created first
#[tokio::test]
async fn gets_all_flights_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::flight::FlightFactory::new(db)
        .aviacompany("Delta")
        .build()
        .await?;
    let second = factory::flight::FlightFactory::new(db)
        .aviacompany("United")
        .build()
        .await?;

    let flights = FlightRepository::new(db).get_all().await?;

    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0].id, first.id);
    assert_eq!(flights[1].id, second.id);

    Ok(())
}

/// Tests listing flights on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list_without_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flights = FlightRepository::new(db).get_all().await?;

    assert!(flights.is_empty());

    Ok(())
}

/// Tests finding a flight by ID.
///
/// Expected: Ok(Some) for existing ID, Ok(None) otherwise
#[tokio::test]
async fn finds_flight_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let repo = FlightRepository::new(db);

    let found = repo.find_by_id(flight.id).await?;
    assert_eq!(found.map(|f| f.aviacompany), Some(flight.aviacompany));

    let missing = repo.find_by_id(flight.id + 100).await?;
    assert!(missing.is_none());

    Ok(())
}
