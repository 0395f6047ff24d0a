//! Create `academic_session` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademicSession::Table)
                    .if_not_exists()
                    .col(uuid(AcademicSession::Id).primary_key())
                    .col(string_len(AcademicSession::Name, 128).unique_key().not_null())
                    .col(date(AcademicSession::StartDate).not_null())
                    .col(date(AcademicSession::EndDate).not_null())
                    .col(boolean(AcademicSession::IsCurrent).not_null())
                    .col(string_len(AcademicSession::Status, 32).not_null())
                    .col(timestamp_with_time_zone(AcademicSession::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AcademicSession::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AcademicSession { Table, Id, Name, StartDate, EndDate, IsCurrent, Status, CreatedAt }
