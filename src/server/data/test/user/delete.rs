use super::*;

/// Tests deleting a user removes their favorites but keeps the flights.
///
/// Expected: Ok(true), favorite gone, flight still present
#[tokio::test]
async fn deletes_user_and_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, flight, favorite) = factory::helpers::create_favorite_with_dependencies(db).await?;

    let deleted = UserRepository::new(db).delete(user.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Favorite::find_by_id(favorite.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Flight::find_by_id(flight.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).delete(11).await?);

    Ok(())
}
