//! Create `time_off_request` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeOffRequest::Table)
                    .if_not_exists()
                    .col(uuid(TimeOffRequest::Id).primary_key())
                    .col(uuid(TimeOffRequest::StaffId).not_null())
                    .col(date(TimeOffRequest::StartDate).not_null())
                    .col(date(TimeOffRequest::EndDate).not_null())
                    .col(double(TimeOffRequest::Hours).not_null())
                    .col(ColumnDef::new(TimeOffRequest::Reason).string_len(512).null())
                    .col(string_len(TimeOffRequest::Status, 32).not_null())
                    .col(timestamp_with_time_zone(TimeOffRequest::SubmittedAt).not_null())
                    .col(ColumnDef::new(TimeOffRequest::ReviewedAt).timestamp_with_time_zone().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_off_request_staff")
                            .from(TimeOffRequest::Table, TimeOffRequest::StaffId)
                            .to(Staff::Table, Staff::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TimeOffRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TimeOffRequest { Table, Id, StaffId, StartDate, EndDate, Hours, Reason, Status, SubmittedAt, ReviewedAt }

#[derive(DeriveIden)]
enum Staff { Table, Id }
