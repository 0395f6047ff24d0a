//! Create `parent_guardian` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParentGuardian::Table)
                    .if_not_exists()
                    .col(uuid(ParentGuardian::Id).primary_key())
                    .col(uuid(ParentGuardian::StudentId).not_null())
                    .col(string_len(ParentGuardian::FirstName, 128).not_null())
                    .col(string_len(ParentGuardian::LastName, 128).not_null())
                    .col(string_len(ParentGuardian::Relationship, 64).not_null())
                    .col(ColumnDef::new(ParentGuardian::Email).string_len(256).null())
                    .col(ColumnDef::new(ParentGuardian::Phone).string_len(32).null())
                    .col(boolean(ParentGuardian::IsPrimaryContact).not_null())
                    .col(timestamp_with_time_zone(ParentGuardian::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parent_guardian_student")
                            .from(ParentGuardian::Table, ParentGuardian::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ParentGuardian::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ParentGuardian { Table, Id, StudentId, FirstName, LastName, Relationship, Email, Phone, IsPrimaryContact, CreatedAt }

#[derive(DeriveIden)]
enum Student { Table, Id }
