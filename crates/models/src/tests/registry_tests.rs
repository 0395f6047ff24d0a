use std::collections::BTreeSet;

use chrono::{NaiveDate, TimeZone, Utc};
use query::{page, FieldKind, FieldValue, FilterCriterion, FilterOperator, ListQuery};
use uuid::Uuid;

use crate::{
    academic_session, account_reconciliation, invoice, parent_guardian, staff, student, time_off_request, Record,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn now() -> sea_orm::prelude::DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap().fixed_offset()
}

fn student(first: &str, last: &str, grade: i32) -> student::Model {
    student::Model {
        id: Uuid::new_v4(),
        student_number: format!("S-{first}-{grade}"),
        first_name: first.into(),
        last_name: last.into(),
        email: None,
        grade_level: grade,
        enrollment_status: "Enrolled".into(),
        date_of_birth: Some(date(2010, 1, 15)),
        created_at: now(),
    }
}

/// Registry names must equal the serde keys so field patches can address them.
fn assert_registry_matches_serde<T: Record>(sample: &T) {
    let json = serde_json::to_value(sample).unwrap();
    let keys: BTreeSet<String> = json.as_object().unwrap().keys().cloned().collect();
    let names: BTreeSet<String> = T::fields().iter().map(|f| f.name().to_string()).collect();
    assert_eq!(keys, names, "registry for {} drifted from the model", T::fields().entity());
}

#[test]
fn every_registry_covers_its_model() {
    assert_registry_matches_serde(&student("Ada", "Lovelace", 9));
    assert_registry_matches_serde(&academic_session::Model {
        id: Uuid::new_v4(),
        name: "2024-2025".into(),
        start_date: date(2024, 9, 1),
        end_date: date(2025, 6, 30),
        is_current: true,
        status: "Active".into(),
        created_at: now(),
    });
    assert_registry_matches_serde(&account_reconciliation::Model {
        id: Uuid::new_v4(),
        account_name: "Operating".into(),
        period_start: date(2024, 9, 1),
        period_end: date(2024, 9, 30),
        statement_balance_cents: 1_000_00,
        ledger_balance_cents: 990_00,
        status: "Open".into(),
        reconciled_at: None,
        notes: None,
        created_at: now(),
    });
    assert_registry_matches_serde(&invoice::Model {
        id: Uuid::new_v4(),
        student_id: Uuid::new_v4(),
        invoice_number: "INV-0001".into(),
        description: Some("Tuition".into()),
        amount_cents: 125_000,
        due_date: date(2024, 10, 1),
        status: "Issued".into(),
        issued_at: now(),
    });
    assert_registry_matches_serde(&parent_guardian::Model {
        id: Uuid::new_v4(),
        student_id: Uuid::new_v4(),
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        relationship: "Mother".into(),
        email: Some("grace@example.com".into()),
        phone: None,
        is_primary_contact: true,
        created_at: now(),
    });
    assert_registry_matches_serde(&staff::Model {
        id: Uuid::new_v4(),
        first_name: "Alan".into(),
        last_name: "Turing".into(),
        email: "alan@example.com".into(),
        department: "Mathematics".into(),
        position: "Teacher".into(),
        is_active: true,
        hired_on: date(2019, 8, 15),
        created_at: now(),
    });
    assert_registry_matches_serde(&time_off_request::Model {
        id: Uuid::new_v4(),
        staff_id: Uuid::new_v4(),
        start_date: date(2024, 12, 20),
        end_date: date(2024, 12, 23),
        hours: 16.0,
        reason: Some("Family".into()),
        status: "Pending".into(),
        submitted_at: now(),
        reviewed_at: None,
    });
}

#[test]
fn pascal_case_names_resolve_on_models() {
    let fields = <student::Model as query::Queryable>::fields();
    assert_eq!(fields.resolve("FirstName").unwrap().name(), "first_name");
    assert_eq!(fields.resolve("GradeLevel").unwrap().kind(), FieldKind::Integer);
    assert_eq!(fields.resolve("DateOfBirth").unwrap().kind(), FieldKind::Date);
    assert!(fields.resolve("Status").is_err());
}

#[test]
fn record_id_round_trips() {
    let mut s = student("Ada", "Lovelace", 9);
    let id = Uuid::new_v4();
    s.set_id(id);
    assert_eq!(s.id(), id);
    let fields = <student::Model as query::Queryable>::fields();
    assert_eq!(fields.resolve("id").unwrap().value(&s), FieldValue::Uuid(id));
}

#[test]
fn models_page_through_the_engine() -> anyhow::Result<()> {
    let students = vec![
        student("Ada", "Lovelace", 9),
        student("Grace", "Hopper", 11),
        student("Alan", "Turing", 10),
        student("Edsger", "Dijkstra", 12),
    ];
    let q = ListQuery::new()
        .filter(FilterCriterion::new("GradeLevel", FilterOperator::GreaterThanOrEqual, "10"))
        .sort_by("LastName", "asc")
        .page(1, 10);
    let out = page(students, &q)?;
    let names: Vec<&str> = out.iter().map(|s| s.last_name.as_str()).collect();
    assert_eq!(names, vec!["Dijkstra", "Hopper", "Turing"]);
    Ok(())
}

#[test]
fn account_difference() {
    let r = account_reconciliation::Model {
        id: Uuid::new_v4(),
        account_name: "Payroll".into(),
        period_start: date(2024, 9, 1),
        period_end: date(2024, 9, 30),
        statement_balance_cents: 5_000,
        ledger_balance_cents: 4_250,
        status: "Open".into(),
        reconciled_at: None,
        notes: None,
        created_at: now(),
    };
    assert_eq!(r.difference_cents(), 750);
}
