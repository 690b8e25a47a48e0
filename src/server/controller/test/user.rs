use super::*;

#[tokio::test]
async fn never_exposes_password() {
    let (_test, app) = setup().await;

    let created = create_user(&app, "pilot@example.com").await;
    assert_eq!(created["email"], "pilot@example.com");
    assert_eq!(created["role"], "user");
    assert!(created.get("password").is_none());

    let (_, list) = send_request(&app, "GET", "/api/user", None).await;
    assert!(list[0].get("password").is_none());

    let uri = format!("/api/user/{}", created["id"]);
    let (_, fetched) = send_request(&app, "GET", &uri, None).await;
    assert!(fetched.get("password").is_none());
}

#[tokio::test]
async fn create_accepts_admin_role() {
    let (_test, app) = setup().await;

    let (status, body) = send_request(
        &app,
        "POST",
        "/api/user",
        Some(json!({ "email": "admin@example.com", "password": "secret", "role": "admin" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn create_rejects_invalid_input() {
    let (_test, app) = setup().await;

    let (missing, _) = send_request(
        &app,
        "POST",
        "/api/user",
        Some(json!({ "email": "pilot@example.com" })),
    )
    .await;
    let (bad_email, _) = send_request(
        &app,
        "POST",
        "/api/user",
        Some(json!({ "email": "pilot", "password": "secret" })),
    )
    .await;
    let (bad_role, _) = send_request(
        &app,
        "POST",
        "/api/user",
        Some(json!({ "email": "pilot@example.com", "password": "secret", "role": "captain" })),
    )
    .await;

    assert_eq!(missing, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email, StatusCode::BAD_REQUEST);
    assert_eq!(bad_role, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_and_delete_user() {
    let (_test, app) = setup().await;
    let created = create_user(&app, "pilot@example.com").await;
    let uri = format!("/api/user/{}", created["id"]);

    let (status, body) = send_request(&app, "PUT", &uri, Some(json!({ "role": "admin" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");
    assert_eq!(body["email"], "pilot@example.com");

    let (status, body) = send_request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User deleted" }));

    let (status, body) = send_request(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}
