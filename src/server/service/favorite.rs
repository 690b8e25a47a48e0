use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, flight::FlightRepository, user::UserRepository},
    error::AppError,
    model::favorite::{CreateFavoriteParams, Favorite, UpdateFavoriteParams},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Favorite>, AppError> {
        let repo = FavoriteRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Favorite, AppError> {
        let repo = FavoriteRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or_else(favorite_not_found)
    }

    /// Adds a flight to a user's favorites
    ///
    /// # Returns
    /// - `Ok(Favorite)` - Created favorite
    /// - `Err(AppError::BadRequest)` - Referenced user or flight does not exist
    pub async fn create(&self, params: CreateFavoriteParams) -> Result<Favorite, AppError> {
        self.ensure_user_exists(params.user_id).await?;
        self.ensure_flight_exists(params.flight_id).await?;

        let repo = FavoriteRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Applies a partial update, validating any re-pointed user or flight
    pub async fn update(
        &self,
        id: i32,
        params: UpdateFavoriteParams,
    ) -> Result<Favorite, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(favorite_not_found());
        }

        if let Some(user_id) = params.user_id {
            self.ensure_user_exists(user_id).await?;
        }
        if let Some(flight_id) = params.flight_id {
            self.ensure_flight_exists(flight_id).await?;
        }

        repo.update(id, params).await?.ok_or_else(favorite_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = FavoriteRepository::new(self.db);

        if repo.delete(id).await? {
            Ok(())
        } else {
            Err(favorite_not_found())
        }
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "User with id {} does not exist",
                user_id
            ))),
        }
    }

    async fn ensure_flight_exists(&self, flight_id: i32) -> Result<(), AppError> {
        match FlightRepository::new(self.db).find_by_id(flight_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Flight with id {} does not exist",
                flight_id
            ))),
        }
    }
}

fn favorite_not_found() -> AppError {
    AppError::NotFound("Favorite not found".to_string())
}
