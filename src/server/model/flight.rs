//! Flight domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::flight::{CreateFlightDto, FlightDto, UpdateFlightDto},
    server::{
        error::AppError,
        util::validate::{non_blank, present},
    },
};

/// A scheduled route between two airports operated by an airline.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub airport_arrival: String,
    pub airport_departure: String,
    pub aviacompany: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flight {
    /// Converts an entity model to a flight domain model at the repository boundary.
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            airport_arrival: entity.airport_arrival,
            airport_departure: entity.airport_departure,
            aviacompany: entity.aviacompany,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the flight domain model to a DTO for API responses.
    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            airport_arrival: self.airport_arrival,
            airport_departure: self.airport_departure,
            aviacompany: self.aviacompany,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated parameters for creating a flight.
#[derive(Debug, Clone)]
pub struct CreateFlightParams {
    pub airport_arrival: String,
    pub airport_departure: String,
    pub aviacompany: String,
}

impl CreateFlightParams {
    /// Validates that every field is present and not blank.
    ///
    /// # Returns
    /// - `Ok(CreateFlightParams)` - Trimmed, validated parameters
    /// - `Err(AppError::BadRequest)` - At least one field missing or blank
    pub fn try_from_dto(dto: CreateFlightDto) -> Result<Self, AppError> {
        match (
            present(dto.airport_arrival),
            present(dto.airport_departure),
            present(dto.aviacompany),
        ) {
            (Some(airport_arrival), Some(airport_departure), Some(aviacompany)) => Ok(Self {
                airport_arrival,
                airport_departure,
                aviacompany,
            }),
            _ => Err(AppError::BadRequest(
                "All fields (airportArrival, airportDeparture, aviacompany) are required"
                    .to_string(),
            )),
        }
    }
}

/// Validated parameters for a partial flight update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateFlightParams {
    pub airport_arrival: Option<String>,
    pub airport_departure: Option<String>,
    pub aviacompany: Option<String>,
}

impl UpdateFlightParams {
    /// Validates that provided fields are not blank.
    pub fn try_from_dto(dto: UpdateFlightDto) -> Result<Self, AppError> {
        Ok(Self {
            airport_arrival: non_blank(dto.airport_arrival, "airportArrival")?,
            airport_departure: non_blank(dto.airport_departure, "airportDeparture")?,
            aviacompany: non_blank(dto.aviacompany, "aviacompany")?,
        })
    }
}
