//! Create `invoice` table.
//!
//! Amounts are stored in cents.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(uuid(Invoice::Id).primary_key())
                    .col(uuid(Invoice::StudentId).not_null())
                    .col(string_len(Invoice::InvoiceNumber, 64).unique_key().not_null())
                    .col(ColumnDef::new(Invoice::Description).string_len(512).null())
                    .col(big_integer(Invoice::AmountCents).not_null())
                    .col(date(Invoice::DueDate).not_null())
                    .col(string_len(Invoice::Status, 32).not_null())
                    .col(timestamp_with_time_zone(Invoice::IssuedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_student")
                            .from(Invoice::Table, Invoice::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Invoice::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Invoice { Table, Id, StudentId, InvoiceNumber, Description, AmountCents, DueDate, Status, IssuedAt }

#[derive(DeriveIden)]
enum Student { Table, Id }
