//! Favorite data repository for database operations.
//!
//! Besides plain CRUD on the join table this repository answers the two
//! association lookups: a user's favorite flights and a flight's favoriting users.
//! Both load the related record alongside each favorite in a single joined query.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    favorite::{CreateFavoriteParams, Favorite, UpdateFavoriteParams},
    flight::Flight,
    user::User,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Favorite>, DbErr> {
        let entity = entity::prelude::Favorite::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Favorite::from_entity))
    }

    pub async fn create(&self, params: CreateFavoriteParams) -> Result<Favorite, DbErr> {
        let now = Utc::now();
        let entity = entity::favorite::ActiveModel {
            country: ActiveValue::Set(params.country),
            user_id: ActiveValue::Set(params.user_id),
            flight_id: ActiveValue::Set(params.flight_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Applies a partial update to a favorite.
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The updated favorite
    /// - `Ok(None)` - No favorite with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateFavoriteParams,
    ) -> Result<Option<Favorite>, DbErr> {
        let Some(existing) = entity::prelude::Favorite::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::favorite::ActiveModel = existing.into();

        if let Some(country) = params.country {
            active.country = ActiveValue::Set(country);
        }
        if let Some(user_id) = params.user_id {
            active.user_id = ActiveValue::Set(user_id);
        }
        if let Some(flight_id) = params.flight_id {
            active.flight_id = ActiveValue::Set(flight_id);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Favorite::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the flights a user marked as favorite, paired with the favorite's country.
    ///
    /// Results are ordered by favorite ID, i.e. the order the user added them.
    pub async fn get_flights_for_user(&self, user_id: i32) -> Result<Vec<(Flight, String)>, DbErr> {
        let rows = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Flight)
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(favorite, flight)| {
                flight.map(|f| (Flight::from_entity(f), favorite.country))
            })
            .collect())
    }

    /// Gets the users who marked a flight as favorite, paired with the favorite's country.
    pub async fn get_users_for_flight(&self, flight_id: i32) -> Result<Vec<(User, String)>, DbErr> {
        let rows = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::FlightId.eq(flight_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(favorite, user)| user.map(|u| (User::from_entity(u), favorite.country)))
            .collect())
    }
}
