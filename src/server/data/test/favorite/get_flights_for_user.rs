use super::*;

/// Tests fetching a user's favorite flights with the join-table country.
///
/// Expected: Ok with both flights in the order they were favorited
#[tokio::test]
async fn returns_flights_with_country() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let jfk = factory::flight::FlightFactory::new(db)
        .airport_arrival("JFK")
        .build()
        .await?;
    let led = factory::flight::FlightFactory::new(db)
        .airport_arrival("LED")
        .build()
        .await?;
    factory::favorite::FavoriteFactory::new(db, user.id, jfk.id)
        .country("USA")
        .build()
        .await?;
    factory::favorite::FavoriteFactory::new(db, user.id, led.id)
        .country("Russia")
        .build()
        .await?;

    let flights = FavoriteRepository::new(db)
        .get_flights_for_user(user.id)
        .await?;

    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0].0.id, jfk.id);
    assert_eq!(flights[0].1, "USA");
    assert_eq!(flights[1].0.airport_arrival, "LED");
    assert_eq!(flights[1].1, "Russia");

    Ok(())
}

/// Tests that favorites of other users are not included.
///
/// Expected: Ok with only the requested user's flight
#[tokio::test]
async fn excludes_other_users_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, flight, _) = factory::helpers::create_favorite_with_dependencies(db).await?;
    factory::helpers::create_favorite_with_dependencies(db).await?;

    let flights = FavoriteRepository::new(db)
        .get_flights_for_user(user.id)
        .await?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].0.id, flight.id);

    Ok(())
}

/// Tests a user without favorites.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let flights = FavoriteRepository::new(db)
        .get_flights_for_user(user.id)
        .await?;

    assert!(flights.is_empty());

    Ok(())
}
