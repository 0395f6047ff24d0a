use std::{marker::PhantomData, sync::Arc};

use models::Record;
use query::{CompiledQuery, ListQuery, Page};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::patch::{apply_patch, FieldPatch};
use crate::repository::Repository;

/// CRUD plus filtered listing for one record type.
pub struct EntityService<T, R> {
    repo: Arc<R>,
    _record: PhantomData<fn() -> T>,
}

impl<T, R> Clone for EntityService<T, R> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone(), _record: PhantomData } }
}

impl<T: Record, R: Repository<T>> EntityService<T, R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, _record: PhantomData } }

    pub fn repository(&self) -> &Arc<R> { &self.repo }

    fn entity() -> &'static str { T::fields().entity() }

    /// Store a new record. A nil id is replaced with a fresh v4 UUID.
    #[instrument(skip(self, item), fields(entity = Self::entity()))]
    pub async fn create(&self, mut item: T) -> Result<T, ServiceError> {
        if item.id().is_nil() {
            item.set_id(Uuid::new_v4());
        }
        let created = self.repo.insert(item).await?;
        info!(id = %created.id(), "record_created");
        Ok(created)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<T>, ServiceError> { self.repo.find(id).await }

    /// Filter, search, sort and page all records of this type.
    ///
    /// The query is validated in full before any record is read, so a bad
    /// page size or unknown property never costs a fetch.
    #[instrument(skip(self, query), fields(entity = Self::entity()))]
    pub async fn list(&self, query: &ListQuery) -> Result<Page<T>, ServiceError> {
        let compiled = CompiledQuery::<T>::compile(query).inspect_err(|e| warn!(error = %e, "list_query_rejected"))?;
        let candidates = self.repo.all().await?;
        Ok(compiled.execute(candidates))
    }

    /// Replace every field of an existing record. The path id wins over the body's.
    #[instrument(skip(self, item), fields(entity = Self::entity()))]
    pub async fn update(&self, id: Uuid, mut item: T) -> Result<T, ServiceError> {
        self.require(id).await?;
        item.set_id(id);
        let updated = self.repo.replace(item).await?;
        info!(%id, "record_updated");
        Ok(updated)
    }

    #[instrument(skip(self, patches), fields(entity = Self::entity(), fields = patches.len()))]
    pub async fn patch(&self, id: Uuid, patches: &[FieldPatch]) -> Result<T, ServiceError> {
        let current = self.require(id).await?;
        let patched = apply_patch(&current, patches)?;
        let updated = self.repo.replace(patched).await?;
        info!(%id, "record_patched");
        Ok(updated)
    }

    #[instrument(skip(self), fields(entity = Self::entity()))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.require(id).await?;
        if !self.repo.remove(id).await? {
            return Err(ServiceError::not_found(Self::entity()));
        }
        info!(%id, "record_deleted");
        Ok(())
    }

    async fn require(&self, id: Uuid) -> Result<T, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found(Self::entity()))
    }
}
