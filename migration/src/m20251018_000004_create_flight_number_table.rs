use sea_orm_migration::{prelude::*, schema::*};

use super::m20251018_000002_create_flight_table::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightNumber::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightNumber::Id))
                    .col(string_uniq(FlightNumber::Aviacompany))
                    .col(integer(FlightNumber::FlightId))
                    .col(
                        timestamp_with_time_zone(FlightNumber::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(FlightNumber::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_number_flight_id")
                            .from(FlightNumber::Table, FlightNumber::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightNumber::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightNumber {
    Table,
    Id,
    Aviacompany,
    FlightId,
    CreatedAt,
    UpdatedAt,
}
