//! Favorite domain models and parameters.
//!
//! A favorite is the join record between a user and a flight, carrying the
//! country the user associated with it.

use chrono::{DateTime, Utc};

use crate::{
    model::favorite::{CreateFavoriteDto, FavoriteDto, UpdateFavoriteDto},
    server::{
        error::AppError,
        util::validate::{non_blank, positive_id, present},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub country: String,
    pub user_id: i32,
    pub flight_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Favorite {
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            country: entity.country,
            user_id: entity.user_id,
            flight_id: entity.flight_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            country: self.country,
            user_id: self.user_id,
            flight_id: self.flight_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFavoriteParams {
    pub country: String,
    pub user_id: i32,
    pub flight_id: i32,
}

impl CreateFavoriteParams {
    pub fn try_from_dto(dto: CreateFavoriteDto) -> Result<Self, AppError> {
        match (
            present(dto.country),
            positive_id(dto.user_id),
            positive_id(dto.flight_id),
        ) {
            (Some(country), Some(user_id), Some(flight_id)) => Ok(Self {
                country,
                user_id,
                flight_id,
            }),
            _ => Err(AppError::BadRequest(
                "Fields country, userId and flightId are required".to_string(),
            )),
        }
    }
}

/// Partial update of a favorite. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateFavoriteParams {
    pub country: Option<String>,
    pub user_id: Option<i32>,
    pub flight_id: Option<i32>,
}

impl UpdateFavoriteParams {
    pub fn try_from_dto(dto: UpdateFavoriteDto) -> Result<Self, AppError> {
        let invalid_id =
            |field: &str| AppError::BadRequest(format!("Field {} must be a positive id", field));

        let user_id = match dto.user_id {
            Some(id) => Some(positive_id(Some(id)).ok_or_else(|| invalid_id("userId"))?),
            None => None,
        };
        let flight_id = match dto.flight_id {
            Some(id) => Some(positive_id(Some(id)).ok_or_else(|| invalid_id("flightId"))?),
            None => None,
        };

        Ok(Self {
            country: non_blank(dto.country, "country")?,
            user_id,
            flight_id,
        })
    }
}
