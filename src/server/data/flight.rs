//! Flight data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::flight::{CreateFlightParams, Flight, UpdateFlightParams};

/// Repository providing database operations for flights.
pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every flight ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Flight>, DbErr> {
        let entities = entity::prelude::Flight::find()
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }

    /// Finds a flight by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - Flight found
    /// - `Ok(None)` - No flight with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr> {
        let entity = entity::prelude::Flight::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Flight::from_entity))
    }

    /// Inserts a new flight with both timestamps set to now.
    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, DbErr> {
        let now = Utc::now();
        let entity = entity::flight::ActiveModel {
            airport_arrival: ActiveValue::Set(params.airport_arrival),
            airport_departure: ActiveValue::Set(params.airport_departure),
            aviacompany: ActiveValue::Set(params.aviacompany),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flight::from_entity(entity))
    }

    /// Applies a partial update to a flight.
    ///
    /// Only the fields set in `params` are written; `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - The updated flight
    /// - `Ok(None)` - No flight with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateFlightParams) -> Result<Option<Flight>, DbErr> {
        let Some(existing) = entity::prelude::Flight::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::flight::ActiveModel = existing.into();

        if let Some(airport_arrival) = params.airport_arrival {
            active.airport_arrival = ActiveValue::Set(airport_arrival);
        }
        if let Some(airport_departure) = params.airport_departure {
            active.airport_departure = ActiveValue::Set(airport_departure);
        }
        if let Some(aviacompany) = params.aviacompany {
            active.aviacompany = ActiveValue::Set(aviacompany);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Flight::from_entity(entity)))
    }

    /// Deletes a flight along with its favorites and flight numbers.
    ///
    /// Dependent rows are removed in the same transaction so the delete never
    /// trips a foreign key, whatever the backend's cascade settings.
    ///
    /// # Returns
    /// - `Ok(true)` - Flight deleted
    /// - `Ok(false)` - No flight with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::FlightId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::FlightNumber::delete_many()
            .filter(entity::flight_number::Column::FlightId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Flight::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
