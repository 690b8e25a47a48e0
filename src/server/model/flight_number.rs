//! Flight number domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::flight_number::{CreateFlightNumberDto, FlightNumberDto, UpdateFlightNumberDto},
    server::{
        error::AppError,
        util::validate::{positive_id, present},
    },
};

const REQUIRED_FIELDS: &str = "Fields aviacompany and flightId are required";

/// A flight number code assigned to a flight. Codes are unique across all flights.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightNumber {
    pub id: i32,
    /// The flight number code, e.g. `DL123`.
    pub aviacompany: String,
    pub flight_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FlightNumber {
    pub fn from_entity(entity: entity::flight_number::Model) -> Self {
        Self {
            id: entity.id,
            aviacompany: entity.aviacompany,
            flight_id: entity.flight_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FlightNumberDto {
        FlightNumberDto {
            id: self.id,
            aviacompany: self.aviacompany,
            flight_id: self.flight_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated parameters for creating or replacing a flight number.
#[derive(Debug, Clone)]
pub struct FlightNumberParams {
    pub aviacompany: String,
    pub flight_id: i32,
}

impl FlightNumberParams {
    fn validate(aviacompany: Option<String>, flight_id: Option<i32>) -> Result<Self, AppError> {
        match (present(aviacompany), positive_id(flight_id)) {
            (Some(aviacompany), Some(flight_id)) => Ok(Self {
                aviacompany,
                flight_id,
            }),
            _ => Err(AppError::BadRequest(REQUIRED_FIELDS.to_string())),
        }
    }

    pub fn try_from_create_dto(dto: CreateFlightNumberDto) -> Result<Self, AppError> {
        Self::validate(dto.aviacompany, dto.flight_id)
    }

    pub fn try_from_update_dto(dto: UpdateFlightNumberDto) -> Result<Self, AppError> {
        Self::validate(dto.aviacompany, dto.flight_id)
    }
}
