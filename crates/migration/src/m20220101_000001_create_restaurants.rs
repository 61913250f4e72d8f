//! Create `restaurants` table.
//!
//! The address lives in the `addr` column; ids are assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurants::Id))
                    .col(string_len(Restaurants::Name, 255))
                    .col(string_len(Restaurants::Addr, 255))
                    .col(timestamp_with_time_zone(Restaurants::CreatedAt))
                    .col(timestamp_with_time_zone(Restaurants::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurants::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Restaurants { Table, Id, Name, Addr, CreatedAt, UpdatedAt }
