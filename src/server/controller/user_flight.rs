use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user_flight::{FlightFavoritesDto, UserFavoritesDto},
    },
    server::{error::AppError, service::user_flight::UserFlightService, state::AppState},
};

/// Tag for grouping user/flight association endpoints in OpenAPI documentation
pub static USER_FLIGHT_TAG: &str = "user_flight";

/// Get a user with their favorite flights.
///
/// Each flight carries the country recorded on the favorite.
///
/// # Returns
/// - `200 OK` - The user and their favorite flights, possibly none
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/userflight/user/{user_id}/favorite",
    tag = USER_FLIGHT_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorite flights", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = user_id?;
    let favorites = UserFlightService::new(&state.db)
        .get_user_favorites(user_id)
        .await?;

    Ok(Json(favorites.into_dto()))
}

/// Get a flight with the users who favorited it.
///
/// # Returns
/// - `200 OK` - The flight and its favoriting users, possibly none
/// - `404 Not Found` - No flight with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/userflight/flight/{flight_id}/favorite",
    tag = USER_FLIGHT_TAG,
    params(
        ("flight_id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favoriting users", body = FlightFavoritesDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_favorites(
    State(state): State<AppState>,
    flight_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(flight_id) = flight_id?;
    let favorites = UserFlightService::new(&state.db)
        .get_flight_favorites(flight_id)
        .await?;

    Ok(Json(favorites.into_dto()))
}
