use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::id::deserialize_optional_id;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 1,
    "aviacompany": "DL123",
    "flightId": 1,
    "createdAt": "2025-10-18T12:00:00Z",
    "updatedAt": "2025-10-18T12:00:00Z"
}))]
pub struct FlightNumberDto {
    pub id: i32,
    /// Flight number code, unique across all flights
    pub aviacompany: String,
    /// Flight this number belongs to
    pub flight_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({ "aviacompany": "DL123", "flightId": 1 }))]
pub struct CreateFlightNumberDto {
    pub aviacompany: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub flight_id: Option<i32>,
}

/// Updates replace both fields, so both are required just like on create.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({ "aviacompany": "DL456", "flightId": 1 }))]
pub struct UpdateFlightNumberDto {
    pub aviacompany: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub flight_id: Option<i32>,
}
