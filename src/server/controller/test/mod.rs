use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod user;

/// Builds the full router over an in-memory database holding every table.
///
/// The context is returned so the database outlives the router.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let app = router(AppState::new(test.db.clone().unwrap()));

    (test, app)
}

/// Sends one request through the router and returns status and JSON body.
///
/// An empty body is returned as `null`.
async fn send_request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);

    let request = match body {
        Some(json_body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json_body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn create_flight(app: &Router) -> Value {
    let (status, body) = send_request(
        app,
        "POST",
        "/api/flight",
        Some(json!({
            "airportArrival": "JFK",
            "airportDeparture": "LAX",
            "aviacompany": "Delta"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body
}

async fn create_user(app: &Router, email: &str) -> Value {
    let (status, body) = send_request(
        app,
        "POST",
        "/api/user",
        Some(json!({ "email": email, "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body
}
