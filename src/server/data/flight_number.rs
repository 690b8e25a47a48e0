//! Flight number data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::flight_number::{FlightNumber, FlightNumberParams};

pub struct FlightNumberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightNumberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<FlightNumber>, DbErr> {
        let entities = entity::prelude::FlightNumber::find()
            .order_by_asc(entity::flight_number::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(FlightNumber::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<FlightNumber>, DbErr> {
        let entity = entity::prelude::FlightNumber::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(FlightNumber::from_entity))
    }

    /// Finds the flight number holding the given code, used to enforce code uniqueness.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<FlightNumber>, DbErr> {
        let entity = entity::prelude::FlightNumber::find()
            .filter(entity::flight_number::Column::Aviacompany.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(FlightNumber::from_entity))
    }

    pub async fn create(&self, params: FlightNumberParams) -> Result<FlightNumber, DbErr> {
        let now = Utc::now();
        let entity = entity::flight_number::ActiveModel {
            aviacompany: ActiveValue::Set(params.aviacompany),
            flight_id: ActiveValue::Set(params.flight_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(FlightNumber::from_entity(entity))
    }

    /// Replaces both fields of a flight number.
    ///
    /// # Returns
    /// - `Ok(Some(FlightNumber))` - The updated flight number
    /// - `Ok(None)` - No flight number with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: FlightNumberParams,
    ) -> Result<Option<FlightNumber>, DbErr> {
        let Some(existing) = entity::prelude::FlightNumber::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::flight_number::ActiveModel = existing.into();
        active.aviacompany = ActiveValue::Set(params.aviacompany);
        active.flight_id = ActiveValue::Set(params.flight_id);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(FlightNumber::from_entity(entity)))
    }

    /// Deletes a flight number, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FlightNumber::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
