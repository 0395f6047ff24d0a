//! Service layer providing CRUD operations for every school entity.
//! - One generic `EntityService` replaces per-entity service boilerplate.
//! - Listing goes through the generic query engine in the `query` crate.
//! - Persistence sits behind the `Repository` trait (sea-orm or JSON file).

pub mod errors;
pub mod repository;
pub mod repo;
pub mod storage;
pub mod patch;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use patch::FieldPatch;
pub use repository::Repository;
pub use services::entity_service::EntityService;
