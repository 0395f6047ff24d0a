use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Student: lookups by surname
        manager
            .create_index(
                Index::create()
                    .name("idx_student_last_name")
                    .table(Student::Table)
                    .col(Student::LastName)
                    .to_owned(),
            )
            .await?;

        // ParentGuardian: index on student_id
        manager
            .create_index(
                Index::create()
                    .name("idx_parent_guardian_student")
                    .table(ParentGuardian::Table)
                    .col(ParentGuardian::StudentId)
                    .to_owned(),
            )
            .await?;

        // Invoice: (student_id, status) for outstanding-balance views
        manager
            .create_index(
                Index::create()
                    .name("idx_invoice_student_status")
                    .table(Invoice::Table)
                    .col(Invoice::StudentId)
                    .col(Invoice::Status)
                    .to_owned(),
            )
            .await?;

        // TimeOffRequest: index on staff_id
        manager
            .create_index(
                Index::create()
                    .name("idx_time_off_request_staff")
                    .table(TimeOffRequest::Table)
                    .col(TimeOffRequest::StaffId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_student_last_name").table(Student::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_parent_guardian_student").table(ParentGuardian::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_invoice_student_status").table(Invoice::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_time_off_request_staff").table(TimeOffRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Student { Table, LastName }

#[derive(DeriveIden)]
enum ParentGuardian { Table, StudentId }

#[derive(DeriveIden)]
enum Invoice { Table, StudentId, Status }

#[derive(DeriveIden)]
enum TimeOffRequest { Table, StaffId }
