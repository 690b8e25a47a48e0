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
        favorite::{CreateFavoriteDto, FavoriteDto, UpdateFavoriteDto},
    },
    server::{
        error::AppError,
        model::favorite::{CreateFavoriteParams, UpdateFavoriteParams},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

#[utoipa::path(
    get,
    path = "/api/favorite",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db).get_all().await?;

    Ok(Json(
        favorites
            .into_iter()
            .map(|favorite| favorite.into_dto())
            .collect::<Vec<FavoriteDto>>(),
    ))
}

/// Mark a flight as a favorite of a user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Country plus the user and flight IDs, all required
///
/// # Returns
/// - `201 Created` - Successfully created favorite
/// - `400 Bad Request` - Missing field, or the user or flight does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/favorite",
    tag = FAVORITE_TAG,
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Successfully created favorite", body = FavoriteDto),
        (status = 400, description = "Missing field or unknown user or flight", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    payload: Result<Json<CreateFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateFavoriteParams::try_from_dto(payload)?;

    let favorite = FavoriteService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/favorite/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorite", body = FavoriteDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let favorite = FavoriteService::new(&state.db).get_by_id(id).await?;

    Ok(Json(favorite.into_dto()))
}

/// Update a favorite.
///
/// Only the fields present in the body are changed. A new user or flight ID must
/// reference an existing record.
#[utoipa::path(
    put,
    path = "/api/favorite/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    request_body = UpdateFavoriteDto,
    responses(
        (status = 200, description = "Successfully updated favorite", body = FavoriteDto),
        (status = 400, description = "Blank field or unknown user or flight", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_favorite(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = UpdateFavoriteParams::try_from_dto(payload)?;

    let favorite = FavoriteService::new(&state.db).update(id, params).await?;

    Ok(Json(favorite.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/favorite/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted favorite"),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    FavoriteService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
