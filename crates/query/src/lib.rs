//! Generic query engine shared by every entity service.
//!
//! Turns a candidate collection plus a [`ListQuery`] (structured filters,
//! free-text search, sort field/order and pagination) into one page of results.
//! Entities expose their fields through a [`FieldRegistry`] built once per type,
//! so filtering and sorting by a field name needs no runtime reflection.

pub mod errors;
pub mod field;
pub mod criterion;
pub mod pagination;
pub mod engine;

pub use criterion::{parse_filters, FilterCriterion, FilterOperator};
pub use engine::{execute, page, CompiledQuery, ListQuery};
pub use errors::QueryError;
pub use field::{Field, FieldKind, FieldRegistry, FieldValue, Queryable};
pub use pagination::{Page, Pagination, SortOrder};
