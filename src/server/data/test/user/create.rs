use super::*;

/// Tests creating a user stores the hashed password but never exposes it.
///
/// Expected: Ok with user created and digest persisted
#[tokio::test]
async fn creates_user_with_hashed_password() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            email: "pilot@example.com".to_string(),
            password_hash: hash_password("secret"),
            role: UserRole::Admin,
        })
        .await?;

    assert_eq!(user.email, "pilot@example.com");
    assert_eq!(user.role, UserRole::Admin);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, hash_password("secret"));

    Ok(())
}

/// Tests listing users in ID order.
///
/// Expected: Ok with all users
#[tokio::test]
async fn gets_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}
