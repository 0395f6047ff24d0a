//! Create `staff` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(uuid(Staff::Id).primary_key())
                    .col(string_len(Staff::FirstName, 128).not_null())
                    .col(string_len(Staff::LastName, 128).not_null())
                    .col(string_len(Staff::Email, 256).unique_key().not_null())
                    .col(string_len(Staff::Department, 128).not_null())
                    .col(string_len(Staff::Position, 128).not_null())
                    .col(boolean(Staff::IsActive).not_null())
                    .col(date(Staff::HiredOn).not_null())
                    .col(timestamp_with_time_zone(Staff::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Staff::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Staff { Table, Id, FirstName, LastName, Email, Department, Position, IsActive, HiredOn, CreatedAt }
