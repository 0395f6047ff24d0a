use async_trait::async_trait;
use models::Record;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Persistence abstraction behind every entity service.
/// Implementations: sea-orm tables (`repo::seaorm`) and JSON files (`storage`).
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Every record, in storage order.
    async fn all(&self) -> Result<Vec<T>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<T>, ServiceError>;
    async fn insert(&self, item: T) -> Result<T, ServiceError>;
    /// Overwrite the stored record with the same id.
    async fn replace(&self, item: T) -> Result<T, ServiceError>;
    /// Returns whether a record was removed.
    async fn remove(&self, id: Uuid) -> Result<bool, ServiceError>;
}
