use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{flight::FlightRepository, flight_number::FlightNumberRepository},
    error::AppError,
    model::flight_number::{FlightNumber, FlightNumberParams},
};

pub struct FlightNumberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightNumberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<FlightNumber>, AppError> {
        let repo = FlightNumberRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<FlightNumber, AppError> {
        let repo = FlightNumberRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(flight_number_not_found)
    }

    /// Creates a flight number after checking the flight exists and the code is free
    ///
    /// # Returns
    /// - `Ok(FlightNumber)` - Created flight number
    /// - `Err(AppError::BadRequest)` - Referenced flight does not exist
    /// - `Err(AppError::Conflict)` - Code already assigned to another flight number
    pub async fn create(&self, params: FlightNumberParams) -> Result<FlightNumber, AppError> {
        self.ensure_flight_exists(params.flight_id).await?;
        self.ensure_code_available(&params.aviacompany, None).await?;

        let repo = FlightNumberRepository::new(self.db);
        let code = params.aviacompany.clone();

        repo.create(params)
            .await
            .map_err(|err| map_code_conflict(err, &code))
    }

    /// Replaces a flight number's code and flight
    ///
    /// # Returns
    /// - `Ok(FlightNumber)` - Updated flight number
    /// - `Err(AppError::NotFound)` - No flight number with that ID
    /// - `Err(AppError::BadRequest)` - Referenced flight does not exist
    /// - `Err(AppError::Conflict)` - Code already assigned to another flight number
    pub async fn update(
        &self,
        id: i32,
        params: FlightNumberParams,
    ) -> Result<FlightNumber, AppError> {
        let repo = FlightNumberRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(flight_number_not_found());
        }

        self.ensure_flight_exists(params.flight_id).await?;
        self.ensure_code_available(&params.aviacompany, Some(id))
            .await?;

        let code = params.aviacompany.clone();

        repo.update(id, params)
            .await
            .map_err(|err| map_code_conflict(err, &code))?
            .ok_or_else(flight_number_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = FlightNumberRepository::new(self.db);

        if repo.delete(id).await? {
            Ok(())
        } else {
            Err(flight_number_not_found())
        }
    }

    async fn ensure_flight_exists(&self, flight_id: i32) -> Result<(), AppError> {
        let flight_repo = FlightRepository::new(self.db);

        match flight_repo.find_by_id(flight_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Flight with id {} does not exist",
                flight_id
            ))),
        }
    }

    /// Fails when `code` belongs to a flight number other than `current_id`.
    async fn ensure_code_available(
        &self,
        code: &str,
        current_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = FlightNumberRepository::new(self.db);

        match repo.find_by_code(code).await? {
            Some(existing) if Some(existing.id) != current_id => Err(code_taken(code)),
            _ => Ok(()),
        }
    }
}

/// Maps a unique constraint violation on the code column to `Conflict`.
///
/// Covers the window between the availability check and the write when two
/// requests claim the same code concurrently.
pub(crate) fn map_code_conflict(err: DbErr, code: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => code_taken(code),
        _ => AppError::DbErr(err),
    }
}

fn code_taken(code: &str) -> AppError {
    AppError::Conflict(format!("Flight number {} already exists", code))
}

fn flight_number_not_found() -> AppError {
    AppError::NotFound("Flight number not found".to_string())
}
