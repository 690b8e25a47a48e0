use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::id::deserialize_optional_id;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub id: i32,
    /// Country the user associated with this favorite
    pub country: String,
    pub user_id: i32,
    pub flight_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({ "country": "USA", "userId": 2, "flightId": 3 }))]
pub struct CreateFavoriteDto {
    pub country: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub flight_id: Option<i32>,
}

/// Partial update: only the provided fields are changed.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFavoriteDto {
    pub country: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub flight_id: Option<i32>,
}
