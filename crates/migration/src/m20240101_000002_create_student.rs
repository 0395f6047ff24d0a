//! Create `student` table.
//!
//! Root record for enrollment; guardians and invoices reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(uuid(Student::Id).primary_key())
                    .col(string_len(Student::StudentNumber, 32).unique_key().not_null())
                    .col(string_len(Student::FirstName, 128).not_null())
                    .col(string_len(Student::LastName, 128).not_null())
                    .col(ColumnDef::new(Student::Email).string_len(256).null())
                    .col(integer(Student::GradeLevel).not_null())
                    .col(string_len(Student::EnrollmentStatus, 32).not_null())
                    .col(ColumnDef::new(Student::DateOfBirth).date().null())
                    .col(timestamp_with_time_zone(Student::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student { Table, Id, StudentNumber, FirstName, LastName, Email, GradeLevel, EnrollmentStatus, DateOfBirth, CreatedAt }
