use crate::server::{
    data::flight::FlightRepository,
    model::flight::{CreateFlightParams, UpdateFlightParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update;
