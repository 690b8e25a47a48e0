use super::*;

/// Tests listing and finding favorites.
///
/// Expected: every favorite listed, lookup by id hits and misses correctly
#[tokio::test]
async fn lists_and_finds_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _flight, favorite) = factory::helpers::create_favorite_with_dependencies(db).await?;
    let second_flight = factory::create_flight(db).await?;
    factory::create_favorite(db, user.id, second_flight.id).await?;

    let repo = FavoriteRepository::new(db);

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, favorite.id);

    let found = repo.find_by_id(favorite.id).await?;
    assert_eq!(found.map(|f| f.country), Some("USA".to_string()));
    assert!(repo.find_by_id(favorite.id + 10).await?.is_none());

    Ok(())
}

/// Tests a partial update of a favorite.
///
/// Expected: Ok(Some) with only the country changed
#[tokio::test]
async fn updates_country_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, flight, favorite) = factory::helpers::create_favorite_with_dependencies(db).await?;

    let updated = FavoriteRepository::new(db)
        .update(
            favorite.id,
            UpdateFavoriteParams {
                country: Some("Germany".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.country, "Germany");
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.flight_id, flight.id);

    Ok(())
}

/// Tests updating and deleting a favorite that does not exist.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn handles_missing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FavoriteRepository::new(db);

    assert!(repo
        .update(5, UpdateFavoriteParams::default())
        .await?
        .is_none());
    assert!(!repo.delete(5).await?);

    Ok(())
}

/// Tests deleting a favorite.
///
/// Expected: Ok(true) and the favorite is gone
#[tokio::test]
async fn deletes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, favorite) = factory::helpers::create_favorite_with_dependencies(db).await?;
    let repo = FavoriteRepository::new(db);

    assert!(repo.delete(favorite.id).await?);
    assert!(repo.find_by_id(favorite.id).await?.is_none());

    Ok(())
}
