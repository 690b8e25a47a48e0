use crate::server::{
    data::favorite::FavoriteRepository,
    model::favorite::{CreateFavoriteParams, UpdateFavoriteParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod crud;
mod get_flights_for_user;
mod get_users_for_flight;
