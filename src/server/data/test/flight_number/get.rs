use super::*;

/// Tests listing all flight numbers.
///
/// Expected: Ok with every flight number across flights
#[tokio::test]
async fn gets_all_flight_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight, _) = factory::helpers::create_flight_number_with_dependencies(db).await?;
    factory::create_flight_number(db, flight.id).await?;
    factory::helpers::create_flight_number_with_dependencies(db).await?;

    let numbers = FlightNumberRepository::new(db).get_all().await?;

    assert_eq!(numbers.len(), 3);
    assert_eq!(numbers.iter().filter(|n| n.flight_id == flight.id).count(), 2);

    Ok(())
}

/// Tests finding a flight number by its code.
///
/// Expected: Ok(Some) for a known code, Ok(None) for an unknown one
#[tokio::test]
async fn finds_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let number = factory::flight_number::FlightNumberFactory::new(db, flight.id)
        .aviacompany("SU100")
        .build()
        .await?;

    let repo = FlightNumberRepository::new(db);

    let found = repo.find_by_code("SU100").await?;
    assert_eq!(found.map(|n| n.id), Some(number.id));

    assert!(repo.find_by_code("SU999").await?.is_none());
    assert!(repo.find_by_id(number.id + 1).await?.is_none());

    Ok(())
}
