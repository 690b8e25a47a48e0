//! Flight factory for creating test flight entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db)
///     .aviacompany("Aeroflot")
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    airport_arrival: String,
    airport_departure: String,
    aviacompany: String,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - airport_arrival: `"JFK"`
    /// - airport_departure: `"LAX"`
    /// - aviacompany: `"Delta"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            airport_arrival: "JFK".to_string(),
            airport_departure: "LAX".to_string(),
            aviacompany: "Delta".to_string(),
        }
    }

    pub fn airport_arrival(mut self, airport: impl Into<String>) -> Self {
        self.airport_arrival = airport.into();
        self
    }

    pub fn airport_departure(mut self, airport: impl Into<String>) -> Self {
        self.airport_departure = airport.into();
        self
    }

    pub fn aviacompany(mut self, aviacompany: impl Into<String>) -> Self {
        self.aviacompany = aviacompany.into();
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        let now = Utc::now();
        entity::flight::ActiveModel {
            airport_arrival: ActiveValue::Set(self.airport_arrival),
            airport_departure: ActiveValue::Set(self.airport_departure),
            aviacompany: ActiveValue::Set(self.aviacompany),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values.
pub async fn create_flight(db: &DatabaseConnection) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db).build().await
}
