use sea_orm::DatabaseConnection;

use crate::server::{
    data::flight::FlightRepository,
    error::AppError,
    model::flight::{CreateFlightParams, Flight, UpdateFlightParams},
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every flight
    pub async fn get_all(&self) -> Result<Vec<Flight>, AppError> {
        let repo = FlightRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a new flight
    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, AppError> {
        let repo = FlightRepository::new(self.db);

        let flight = repo.create(params).await?;

        tracing::info!("Created flight {}", flight.id);

        Ok(flight)
    }

    /// Gets a flight by ID, failing with 404 when it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Flight, AppError> {
        let repo = FlightRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or_else(flight_not_found)
    }

    /// Applies a partial update to a flight
    pub async fn update(&self, id: i32, params: UpdateFlightParams) -> Result<Flight, AppError> {
        let repo = FlightRepository::new(self.db);

        repo.update(id, params).await?.ok_or_else(flight_not_found)
    }

    /// Deletes a flight together with its favorites and flight numbers
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = FlightRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(flight_not_found());
        }

        tracing::info!("Deleted flight {}", id);

        Ok(())
    }
}

pub(crate) fn flight_not_found() -> AppError {
    AppError::NotFound("Flight not found".to_string())
}
