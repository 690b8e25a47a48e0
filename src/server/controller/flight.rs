use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        flight::{CreateFlightDto, FlightDto, UpdateFlightDto},
    },
    server::{
        error::AppError,
        model::flight::{CreateFlightParams, UpdateFlightParams},
        service::flight::FlightService,
        state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Get all flights.
///
/// # Returns
/// - `200 OK` - Every flight ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flight",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved flights", body = Vec<FlightDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flights(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let flights = FlightService::new(&state.db).get_all().await?;

    Ok(Json(
        flights
            .into_iter()
            .map(|flight| flight.into_dto())
            .collect::<Vec<FlightDto>>(),
    ))
}

/// Create a new flight.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Arrival airport, departure airport and airline, all required
///
/// # Returns
/// - `201 Created` - Successfully created flight
/// - `400 Bad Request` - A field is missing or blank
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/flight",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 201, description = "Successfully created flight", body = FlightDto),
        (status = 400, description = "Missing or blank field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlightDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateFlightParams::try_from_dto(payload)?;

    let flight = FlightService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}

/// Get a flight by ID.
#[utoipa::path(
    get,
    path = "/api/flight/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved flight", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let flight = FlightService::new(&state.db).get_by_id(id).await?;

    Ok(Json(flight.into_dto()))
}

/// Update a flight.
///
/// Only the fields present in the body are changed. A field that is present but
/// blank is rejected.
///
/// # Returns
/// - `200 OK` - The updated flight
/// - `400 Bad Request` - A provided field is blank
/// - `404 Not Found` - No flight with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/flight/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    request_body = UpdateFlightDto,
    responses(
        (status = 200, description = "Successfully updated flight", body = FlightDto),
        (status = 400, description = "Blank field", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateFlightDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = UpdateFlightParams::try_from_dto(payload)?;

    let flight = FlightService::new(&state.db).update(id, params).await?;

    Ok(Json(flight.into_dto()))
}

/// Delete a flight.
///
/// Favorites and flight numbers referencing the flight are removed with it.
///
/// # Returns
/// - `200 OK` - Flight deleted
/// - `404 Not Found` - No flight with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/flight/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted flight", body = MessageDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    FlightService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto {
        message: "Flight deleted".to_string(),
    }))
}
