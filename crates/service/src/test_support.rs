#![cfg(test)]
use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::{db::connect_with_config, invoice, student};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use uuid::Uuid;

// Migrations run at most once per test process; `false` means no database.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn db_config() -> Option<DatabaseConfig> {
    // DATABASE_URL (after .env), falling back to the local dev database
    let mut cfg = DatabaseConfig { url: models::db::DATABASE_URL.clone(), ..DatabaseConfig::default() };
    cfg.min_connections = 1;
    cfg.connect_timeout_secs = 3;
    cfg.acquire_timeout_secs = 3;
    cfg.validate().ok()?;
    Some(cfg)
}

/// Live Postgres for integration tests, or `None` when `SKIP_DB_TESTS` is set
/// or no database is reachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let cfg = db_config()?;

    let ready = *MIGRATED
        .get_or_init(|| async {
            let Ok(db) = connect_with_config(&cfg).await else { return false };
            let ok = migration::Migrator::up(&db, None).await.is_ok();
            drop(db);
            ok
        })
        .await;
    if !ready {
        return None;
    }

    // fresh connection for the current test's runtime
    tokio::time::timeout(Duration::from_secs(5), connect_with_config(&cfg)).await.ok()?.ok()
}

/// Fixed so that fixtures built twice compare equal.
pub fn enrolled_at() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 9, 2, 8, 30, 0).unwrap().fixed_offset()
}

pub fn student(number: &str, first: &str, last: &str, grade: i32) -> student::Model {
    student::Model {
        id: Uuid::new_v4(),
        student_number: number.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: None,
        grade_level: grade,
        enrollment_status: "Active".to_string(),
        date_of_birth: None,
        created_at: enrolled_at(),
    }
}

/// Four students with stable ids, in insertion order.
pub fn seeded_students() -> Vec<student::Model> {
    [("S-001", "Ada", "Lovelace", 9), ("S-002", "Marie", "Curie", 10), ("S-003", "Grace", "Hopper", 11), ("S-004", "Alan", "Turing", 12)]
        .into_iter()
        .enumerate()
        .map(|(i, (number, first, last, grade))| {
            let mut s = student(number, first, last, grade);
            s.id = Uuid::from_u128(0x5c40_0000 + i as u128 + 1);
            s
        })
        .collect()
}

pub fn invoice(student_id: Uuid, number: &str, amount_cents: i64, status: &str) -> invoice::Model {
    invoice::Model {
        id: Uuid::new_v4(),
        student_id,
        invoice_number: number.to_string(),
        description: Some("Tuition".to_string()),
        amount_cents,
        due_date: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap_or_default(),
        status: status.to_string(),
        issued_at: enrolled_at(),
    }
}
