use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::Record;
use tokio::{fs, sync::RwLock};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::repository::Repository;

/// Insertion-ordered record store, optionally persisted as a JSON array.
///
/// Without a file path the store lives purely in memory. With one, every
/// mutation writes the file first and is only applied in memory once the
/// write succeeded, all under the write lock.
#[derive(Clone)]
pub struct JsonRecordStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
    file_path: Option<PathBuf>,
}

impl<T: Record> JsonRecordStore<T> {
    pub fn in_memory() -> Self { Self::with_records(Vec::new()) }

    pub fn with_records(records: Vec<T>) -> Self {
        Self { inner: Arc::new(RwLock::new(records)), file_path: None }
    }

    /// Open a store backed by `path`. Creates the file with an empty array if missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        }

        let records: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Db(format!("corrupt store {}: {}", file_path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                fs::write(&file_path, b"[]").await.map_err(|e| ServiceError::Db(e.to_string()))?;
                Vec::new()
            }
            Err(e) => return Err(ServiceError::Db(e.to_string())),
        };

        Ok(Self { inner: Arc::new(RwLock::new(records)), file_path: Some(file_path) })
    }

    async fn save(&self, records: &[T]) -> Result<(), ServiceError> {
        let Some(path) = &self.file_path else { return Ok(()) };
        let data = serde_json::to_vec_pretty(records).map_err(|e| ServiceError::Db(e.to_string()))?;
        fs::write(path, data).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    pub async fn len(&self) -> usize { self.inner.read().await.len() }

    pub async fn is_empty(&self) -> bool { self.inner.read().await.is_empty() }
}

#[async_trait]
impl<T: Record> Repository<T> for JsonRecordStore<T> {
    async fn all(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<T>, ServiceError> {
        Ok(self.inner.read().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, item: T) -> Result<T, ServiceError> {
        let mut records = self.inner.write().await;
        if records.iter().any(|r| r.id() == item.id()) {
            return Err(ServiceError::Conflict(format!("{} {} already exists", T::fields().entity(), item.id())));
        }
        let mut next = records.clone();
        next.push(item.clone());
        self.save(&next).await?;
        *records = next;
        Ok(item)
    }

    async fn replace(&self, item: T) -> Result<T, ServiceError> {
        let mut records = self.inner.write().await;
        let pos = records
            .iter()
            .position(|r| r.id() == item.id())
            .ok_or_else(|| ServiceError::not_found(T::fields().entity()))?;
        let mut next = records.clone();
        next[pos] = item.clone();
        self.save(&next).await?;
        *records = next;
        Ok(item)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut records = self.inner.write().await;
        let Some(pos) = records.iter().position(|r| r.id() == id) else { return Ok(false) };
        let mut next = records.clone();
        next.remove(pos);
        self.save(&next).await?;
        *records = next;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::student;

    #[tokio::test]
    async fn json_record_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_record_store_{}.json", Uuid::new_v4()));
        let store = JsonRecordStore::open(&tmp).await?;
        assert!(store.is_empty().await);

        let ada = student("S-001", "Ada", "Lovelace", 9);
        let alan = student("S-002", "Alan", "Turing", 10);
        store.insert(ada.clone()).await?;
        store.insert(alan.clone()).await?;
        assert!(matches!(store.insert(ada.clone()).await, Err(ServiceError::Conflict(_))));

        let mut promoted = ada.clone();
        promoted.grade_level = 10;
        store.replace(promoted.clone()).await?;
        assert!(store.remove(alan.id).await?);
        assert!(!store.remove(alan.id).await?);

        let reloaded = JsonRecordStore::<models::student::Model>::open(&tmp).await?;
        assert_eq!(reloaded.all().await?, vec![promoted]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn keeps_insertion_order() -> Result<(), anyhow::Error> {
        let store = JsonRecordStore::in_memory();
        let students: Vec<_> = ["S-3", "S-1", "S-2"].into_iter().map(|n| student(n, "First", "Last", 9)).collect();
        for s in &students {
            store.insert(s.clone()).await?;
        }
        assert_eq!(store.all().await?, students);
        Ok(())
    }

    #[tokio::test]
    async fn replace_of_missing_record_is_not_found() {
        let store = JsonRecordStore::in_memory();
        let ada = student("S-001", "Ada", "Lovelace", 9);
        assert!(matches!(store.replace(ada).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_record_store_{}.json", Uuid::new_v4()));
        tokio::fs::write(&tmp, b"{not json").await?;
        let opened = JsonRecordStore::<models::student::Model>::open(&tmp).await;
        assert!(matches!(opened, Err(ServiceError::Db(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_write_leaves_memory_untouched() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("json_record_store_{}", Uuid::new_v4()));
        let store = JsonRecordStore::open(dir.join("students.json")).await?;
        let ada = student("S-001", "Ada", "Lovelace", 9);
        store.insert(ada.clone()).await?;

        tokio::fs::remove_dir_all(&dir).await?;
        let alan = student("S-002", "Alan", "Turing", 10);
        assert!(matches!(store.insert(alan).await, Err(ServiceError::Db(_))));
        let mut promoted = ada.clone();
        promoted.grade_level = 10;
        assert!(matches!(store.replace(promoted).await, Err(ServiceError::Db(_))));
        assert!(matches!(store.remove(ada.id).await, Err(ServiceError::Db(_))));

        assert_eq!(store.all().await?, vec![ada]);
        Ok(())
    }
}
