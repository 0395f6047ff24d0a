//! sea-orm entity models for the school administration domain.
//!
//! Every model registers its queryable fields (see [`query::FieldRegistry`])
//! and implements [`record::Record`], which is all the generic service layer
//! needs to create, list, update, patch and delete it.

pub mod db;
pub mod record;
pub mod academic_session;
pub mod account_reconciliation;
pub mod invoice;
pub mod parent_guardian;
pub mod staff;
pub mod student;
pub mod time_off_request;

pub use record::Record;

#[cfg(test)]
mod tests;
