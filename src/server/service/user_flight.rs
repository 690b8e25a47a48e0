//! Lookups across the user/flight many-to-many association.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, flight::FlightRepository, user::UserRepository},
    error::AppError,
    model::user_flight::{FlightFavorites, UserFavorites},
    service::{flight::flight_not_found, user::user_not_found},
};

pub struct UserFlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user together with their favorite flights
    ///
    /// # Returns
    /// - `Ok(UserFavorites)` - The user with zero or more flights
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavorites, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(user_not_found)?;

        let flights = FavoriteRepository::new(self.db)
            .get_flights_for_user(user_id)
            .await?;

        Ok(UserFavorites { user, flights })
    }

    /// Gets a flight together with the users who favorited it
    ///
    /// # Returns
    /// - `Ok(FlightFavorites)` - The flight with zero or more users
    /// - `Err(AppError::NotFound)` - No flight with that ID
    pub async fn get_flight_favorites(&self, flight_id: i32) -> Result<FlightFavorites, AppError> {
        let flight = FlightRepository::new(self.db)
            .find_by_id(flight_id)
            .await?
            .ok_or_else(flight_not_found)?;

        let users = FavoriteRepository::new(self.db)
            .get_users_for_flight(flight_id)
            .await?;

        Ok(FlightFavorites { flight, users })
    }
}
