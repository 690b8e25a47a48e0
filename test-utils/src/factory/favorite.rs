//! Favorite factory for creating user/flight favorite links.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating favorites between an existing user and flight.
pub struct FavoriteFactory<'a> {
    db: &'a DatabaseConnection,
    country: String,
    user_id: i32,
    flight_id: i32,
}

impl<'a> FavoriteFactory<'a> {
    /// Creates a new FavoriteFactory.
    ///
    /// Defaults:
    /// - country: `"USA"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, flight_id: i32) -> Self {
        Self {
            db,
            country: "USA".to_string(),
            user_id,
            flight_id,
        }
    }

    /// Sets the country recorded on the favorite.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Builds and inserts the favorite entity into the database.
    pub async fn build(self) -> Result<entity::favorite::Model, DbErr> {
        let now = Utc::now();
        entity::favorite::ActiveModel {
            country: ActiveValue::Set(self.country),
            user_id: ActiveValue::Set(self.user_id),
            flight_id: ActiveValue::Set(self.flight_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a favorite with default values linking the given user and flight.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    flight_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id, flight_id).build().await
}
