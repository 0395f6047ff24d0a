pub mod entity_service;
pub mod school;

pub use entity_service::EntityService;
pub use school::*;
