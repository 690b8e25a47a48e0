use crate::server::{
    data::flight_number::FlightNumberRepository, model::flight_number::FlightNumberParams,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update;
