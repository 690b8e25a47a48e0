use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 1,
    "airportArrival": "JFK",
    "airportDeparture": "LAX",
    "aviacompany": "Delta",
    "createdAt": "2025-10-18T12:00:00Z",
    "updatedAt": "2025-10-18T12:00:00Z"
}))]
pub struct FlightDto {
    pub id: i32,
    /// Arrival airport of the flight
    pub airport_arrival: String,
    /// Departure airport of the flight
    pub airport_departure: String,
    /// Airline operating the flight
    pub aviacompany: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// All three fields are required; they are optional here so a missing key
/// produces a 400 with a readable message instead of a deserialization error.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "airportArrival": "JFK",
    "airportDeparture": "LAX",
    "aviacompany": "Delta"
}))]
pub struct CreateFlightDto {
    pub airport_arrival: Option<String>,
    pub airport_departure: Option<String>,
    pub aviacompany: Option<String>,
}

/// Partial update: only the provided fields are changed.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightDto {
    pub airport_arrival: Option<String>,
    pub airport_departure: Option<String>,
    pub aviacompany: Option<String>,
}
