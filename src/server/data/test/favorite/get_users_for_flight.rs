use super::*;

/// Tests fetching the users who favorited a flight.
///
/// Expected: Ok with both users and their countries
#[tokio::test]
async fn returns_users_with_country() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let alice = factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .email("bob@example.com")
        .build()
        .await?;
    factory::favorite::FavoriteFactory::new(db, alice.id, flight.id)
        .country("France")
        .build()
        .await?;
    factory::favorite::FavoriteFactory::new(db, bob.id, flight.id)
        .country("Italy")
        .build()
        .await?;

    let users = FavoriteRepository::new(db)
        .get_users_for_flight(flight.id)
        .await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].0.email, "alice@example.com");
    assert_eq!(users[0].1, "France");
    assert_eq!(users[1].0.id, bob.id);
    assert_eq!(users[1].1, "Italy");

    Ok(())
}

/// Tests a flight nobody favorited.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unfavorited_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;

    let users = FavoriteRepository::new(db)
        .get_users_for_flight(flight.id)
        .await?;

    assert!(users.is_empty());

    Ok(())
}
