use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserRoleDto;

/// Join-table attributes attached to each associated record.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct FavoriteAttributesDto {
    pub country: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteFlightDto {
    pub id: i32,
    pub airport_arrival: String,
    pub airport_departure: String,
    pub aviacompany: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorite: FavoriteAttributesDto,
}

/// A user together with every flight they marked as favorite.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserFavoritesDto {
    pub id: i32,
    pub email: String,
    pub role: UserRoleDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub flights: Vec<FavoriteFlightDto>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FavoritingUserDto {
    pub id: i32,
    pub email: String,
    pub role: UserRoleDto,
    pub favorite: FavoriteAttributesDto,
}

/// A flight together with every user who marked it as favorite.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FlightFavoritesDto {
    pub id: i32,
    pub airport_arrival: String,
    pub airport_departure: String,
    pub aviacompany: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub users: Vec<FavoritingUserDto>,
}
