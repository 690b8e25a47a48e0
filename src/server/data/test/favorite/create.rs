use super::*;

/// Tests creating a favorite between an existing user and flight.
///
/// Expected: Ok with the favorite carrying the country and both ids
#[tokio::test]
async fn creates_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let flight = factory::create_flight(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(CreateFavoriteParams {
            country: "Spain".to_string(),
            user_id: user.id,
            flight_id: flight.id,
        })
        .await?;

    assert_eq!(favorite.country, "Spain");
    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.flight_id, flight.id);

    Ok(())
}
