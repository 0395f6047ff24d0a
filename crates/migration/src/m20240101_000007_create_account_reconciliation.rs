//! Create `account_reconciliation` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountReconciliation::Table)
                    .if_not_exists()
                    .col(uuid(AccountReconciliation::Id).primary_key())
                    .col(string_len(AccountReconciliation::AccountName, 128).not_null())
                    .col(date(AccountReconciliation::PeriodStart).not_null())
                    .col(date(AccountReconciliation::PeriodEnd).not_null())
                    .col(big_integer(AccountReconciliation::StatementBalanceCents).not_null())
                    .col(big_integer(AccountReconciliation::LedgerBalanceCents).not_null())
                    .col(string_len(AccountReconciliation::Status, 32).not_null())
                    .col(ColumnDef::new(AccountReconciliation::ReconciledAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(AccountReconciliation::Notes).text().null())
                    .col(timestamp_with_time_zone(AccountReconciliation::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AccountReconciliation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AccountReconciliation {
    Table,
    Id,
    AccountName,
    PeriodStart,
    PeriodEnd,
    StatementBalanceCents,
    LedgerBalanceCents,
    Status,
    ReconciledAt,
    Notes,
    CreatedAt,
}
