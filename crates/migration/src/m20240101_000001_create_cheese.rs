//! Create `cheese` table.
//!
//! One row per cheese: generated integer key plus the open JSON payload.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cheese::Table)
                    .if_not_exists()
                    .col(big_integer(Cheese::Id).auto_increment().primary_key())
                    .col(json(Cheese::Fields).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cheese::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cheese { Table, Id, Fields }
