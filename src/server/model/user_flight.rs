//! Association views over the favorite join table.

use crate::{
    model::user_flight::{
        FavoriteAttributesDto, FavoriteFlightDto, FavoritingUserDto, FlightFavoritesDto,
        UserFavoritesDto,
    },
    server::model::{
        flight::Flight,
        user::{role_into_dto, User},
    },
};

/// A user with each favorited flight and the country recorded on the favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFavorites {
    pub user: User,
    pub flights: Vec<(Flight, String)>,
}

impl UserFavorites {
    pub fn into_dto(self) -> UserFavoritesDto {
        UserFavoritesDto {
            id: self.user.id,
            email: self.user.email,
            role: role_into_dto(self.user.role),
            created_at: self.user.created_at,
            updated_at: self.user.updated_at,
            flights: self
                .flights
                .into_iter()
                .map(|(flight, country)| FavoriteFlightDto {
                    id: flight.id,
                    airport_arrival: flight.airport_arrival,
                    airport_departure: flight.airport_departure,
                    aviacompany: flight.aviacompany,
                    created_at: flight.created_at,
                    updated_at: flight.updated_at,
                    favorite: FavoriteAttributesDto { country },
                })
                .collect(),
        }
    }
}

/// A flight with each user who favorited it and the country recorded on the favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightFavorites {
    pub flight: Flight,
    pub users: Vec<(User, String)>,
}

impl FlightFavorites {
    pub fn into_dto(self) -> FlightFavoritesDto {
        FlightFavoritesDto {
            id: self.flight.id,
            airport_arrival: self.flight.airport_arrival,
            airport_departure: self.flight.airport_departure,
            aviacompany: self.flight.aviacompany,
            created_at: self.flight.created_at,
            updated_at: self.flight.updated_at,
            users: self
                .users
                .into_iter()
                .map(|(user, country)| FavoritingUserDto {
                    id: user.id,
                    email: user.email,
                    role: role_into_dto(user.role),
                    favorite: FavoriteAttributesDto { country },
                })
                .collect(),
        }
    }
}
