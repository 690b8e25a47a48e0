//! Flight number factory for creating test flight number entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flight numbers attached to an existing flight.
pub struct FlightNumberFactory<'a> {
    db: &'a DatabaseConnection,
    aviacompany: String,
    flight_id: i32,
}

impl<'a> FlightNumberFactory<'a> {
    /// Creates a new FlightNumberFactory with default values.
    ///
    /// Defaults:
    /// - aviacompany: `"FN{id}"` where id is auto-incremented, keeping the unique column unique
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `flight_id` - ID of the flight this number belongs to
    pub fn new(db: &'a DatabaseConnection, flight_id: i32) -> Self {
        Self {
            db,
            aviacompany: format!("FN{}", next_id()),
            flight_id,
        }
    }

    /// Sets the flight number code.
    pub fn aviacompany(mut self, code: impl Into<String>) -> Self {
        self.aviacompany = code.into();
        self
    }

    /// Builds and inserts the flight number entity into the database.
    pub async fn build(self) -> Result<entity::flight_number::Model, DbErr> {
        let now = Utc::now();
        entity::flight_number::ActiveModel {
            aviacompany: ActiveValue::Set(self.aviacompany),
            flight_id: ActiveValue::Set(self.flight_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight number with default values for the given flight.
pub async fn create_flight_number(
    db: &DatabaseConnection,
    flight_id: i32,
) -> Result<entity::flight_number::Model, DbErr> {
    FlightNumberFactory::new(db, flight_id).build().await
}
