//! File-backed and in-memory record storage.
//!
//! Used where a database is overkill: tests, fixtures and small deployments
//! that keep their records as a JSON array on disk.

pub mod json_record_store;

pub use json_record_store::JsonRecordStore;
