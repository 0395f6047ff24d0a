//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_academic_session;
mod m20240101_000002_create_student;
mod m20240101_000003_create_parent_guardian;
mod m20240101_000004_create_staff;
mod m20240101_000005_create_time_off_request;
mod m20240101_000006_create_invoice;
mod m20240101_000007_create_account_reconciliation;
mod m20240101_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_academic_session::Migration),
            Box::new(m20240101_000002_create_student::Migration),
            Box::new(m20240101_000003_create_parent_guardian::Migration),
            Box::new(m20240101_000004_create_staff::Migration),
            Box::new(m20240101_000005_create_time_off_request::Migration),
            Box::new(m20240101_000006_create_invoice::Migration),
            Box::new(m20240101_000007_create_account_reconciliation::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000008_add_indexes::Migration),
        ]
    }
}
