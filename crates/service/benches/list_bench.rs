use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use chrono::Utc;
use models::student;
use query::{FilterCriterion, FilterOperator, ListQuery};
use service::storage::JsonRecordStore;
use service::EntityService;
use uuid::Uuid;

fn students(n: usize) -> Vec<student::Model> {
    (0..n)
        .map(|i| student::Model {
            id: Uuid::new_v4(),
            student_number: format!("S-{:06}", i),
            first_name: format!("First{}", i % 97),
            last_name: format!("Last{}", i % 389),
            email: (i % 3 == 0).then(|| format!("s{}@school.example", i)),
            grade_level: (i % 12) as i32 + 1,
            enrollment_status: if i % 10 == 0 { "Withdrawn".into() } else { "Active".into() },
            date_of_birth: None,
            created_at: Utc::now().fixed_offset(),
        })
        .collect()
}

fn bench_list(c: &mut Criterion) {
    let svc: EntityService<student::Model, _> = EntityService::new(Arc::new(JsonRecordStore::with_records(students(10_000))));
    let rt = tokio::runtime::Runtime::new().unwrap();

    let filtered = ListQuery::new()
        .filter(FilterCriterion::eq("EnrollmentStatus", "active"))
        .filter(FilterCriterion::new("GradeLevel", FilterOperator::GreaterThanOrEqual, "9"))
        .sort_by("LastName", "desc")
        .page(3, 50);
    c.bench_function("student_list_filter_sort_10k", |b| {
        b.iter(|| rt.block_on(svc.list(&filtered)).unwrap());
    });

    let search = ListQuery::new().search("last38").page(1, 25);
    c.bench_function("student_list_search_10k", |b| {
        b.iter(|| rt.block_on(svc.list(&search)).unwrap());
    });
}

criterion_group!(benches, bench_list);
criterion_main!(benches);
