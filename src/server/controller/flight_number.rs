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
        api::ErrorDto,
        flight_number::{CreateFlightNumberDto, FlightNumberDto, UpdateFlightNumberDto},
    },
    server::{
        error::AppError, model::flight_number::FlightNumberParams,
        service::flight_number::FlightNumberService, state::AppState,
    },
};

/// Tag for grouping flight number endpoints in OpenAPI documentation
pub static FLIGHT_NUMBER_TAG: &str = "flight_number";

#[utoipa::path(
    get,
    path = "/api/flightnumber",
    tag = FLIGHT_NUMBER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved flight numbers", body = Vec<FlightNumberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_numbers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let flight_numbers = FlightNumberService::new(&state.db).get_all().await?;

    Ok(Json(
        flight_numbers
            .into_iter()
            .map(|flight_number| flight_number.into_dto())
            .collect::<Vec<FlightNumberDto>>(),
    ))
}

/// Create a flight number for an existing flight.
///
/// # Returns
/// - `201 Created` - Successfully created flight number
/// - `400 Bad Request` - Missing field or the flight does not exist
/// - `409 Conflict` - Flight number code already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/flightnumber",
    tag = FLIGHT_NUMBER_TAG,
    request_body = CreateFlightNumberDto,
    responses(
        (status = 201, description = "Successfully created flight number", body = FlightNumberDto),
        (status = 400, description = "Missing field or unknown flight", body = ErrorDto),
        (status = 409, description = "Flight number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight_number(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlightNumberDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = FlightNumberParams::try_from_create_dto(payload)?;

    let flight_number = FlightNumberService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(flight_number.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/flightnumber/{id}",
    tag = FLIGHT_NUMBER_TAG,
    params(
        ("id" = i32, Path, description = "Flight number ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved flight number", body = FlightNumberDto),
        (status = 404, description = "Flight number not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_number(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let flight_number = FlightNumberService::new(&state.db).get_by_id(id).await?;

    Ok(Json(flight_number.into_dto()))
}

/// Replace a flight number's code and flight.
///
/// Both fields are required.
///
/// # Returns
/// - `200 OK` - The updated flight number
/// - `400 Bad Request` - Missing field or the flight does not exist
/// - `404 Not Found` - No flight number with that ID
/// - `409 Conflict` - Code already used by another flight number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/flightnumber/{id}",
    tag = FLIGHT_NUMBER_TAG,
    params(
        ("id" = i32, Path, description = "Flight number ID")
    ),
    request_body = UpdateFlightNumberDto,
    responses(
        (status = 200, description = "Successfully updated flight number", body = FlightNumberDto),
        (status = 400, description = "Missing field or unknown flight", body = ErrorDto),
        (status = 404, description = "Flight number not found", body = ErrorDto),
        (status = 409, description = "Flight number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight_number(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateFlightNumberDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = FlightNumberParams::try_from_update_dto(payload)?;

    let flight_number = FlightNumberService::new(&state.db)
        .update(id, params)
        .await?;

    Ok(Json(flight_number.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/flightnumber/{id}",
    tag = FLIGHT_NUMBER_TAG,
    params(
        ("id" = i32, Path, description = "Flight number ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted flight number"),
        (status = 404, description = "Flight number not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight_number(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    FlightNumberService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
