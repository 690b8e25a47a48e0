//! Route registration and the generated OpenAPI document.
//!
//! Routes are registered through `OpenApiRouter` so the served paths and the
//! documented paths come from the same handler list.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{favorite, flight, flight_number, user, user_flight},
    state::AppState,
};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(title = "Flightboard API", description = "Flights, flight numbers, users and favorite flights"),
    tags(
        (name = "flight", description = "Flight management"),
        (name = "flight_number", description = "Flight number management"),
        (name = "favorite", description = "Favorite flight management"),
        (name = "user", description = "User management"),
        (name = "user_flight", description = "Lookups between users and their favorite flights"),
    )
)]
struct ApiDoc;

/// Builds the application router with API docs and HTTP layers attached.
pub fn router(state: AppState) -> Router {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(flight::get_flights, flight::create_flight))
        .routes(routes!(
            flight::get_flight,
            flight::update_flight,
            flight::delete_flight
        ))
        .routes(routes!(
            flight_number::get_flight_numbers,
            flight_number::create_flight_number
        ))
        .routes(routes!(
            flight_number::get_flight_number,
            flight_number::update_flight_number,
            flight_number::delete_flight_number
        ))
        .routes(routes!(favorite::get_favorites, favorite::create_favorite))
        .routes(routes!(
            favorite::get_favorite,
            favorite::update_favorite,
            favorite::delete_favorite
        ))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user_flight::get_user_favorites))
        .routes(routes!(user_flight::get_flight_favorites))
}
