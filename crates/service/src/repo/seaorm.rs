use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use models::Record;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Iterable,
    ModelTrait, PrimaryKeyTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::repository::Repository;

/// Repository over one sea-orm entity table keyed by a UUID primary key.
/// The connection is shared: `DatabaseConnection` is not `Clone` under the `mock` feature.
pub struct SeaOrmRepository<E> {
    pub db: Arc<DatabaseConnection>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: EntityTrait> SeaOrmRepository<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self { Self { db, _entity: PhantomData } }
}

impl<E> Clone for SeaOrmRepository<E> {
    fn clone(&self) -> Self { Self { db: self.db.clone(), _entity: PhantomData } }
}

/// Every column set, so inserts and updates write the whole row.
fn full_active_model<E>(item: &E::Model) -> E::ActiveModel
where
    E: EntityTrait,
    E::ActiveModel: ActiveModelTrait<Entity = E>,
{
    let mut am = <E::ActiveModel as ActiveModelTrait>::default();
    for col in E::Column::iter() {
        am.set(col, item.get(col));
    }
    am
}

#[async_trait]
impl<E> Repository<E::Model> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: Record + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    async fn all(&self) -> Result<Vec<E::Model>, ServiceError> {
        let rows = E::find().all(self.db.as_ref()).await?;
        debug!(entity = <E::Model as query::Queryable>::fields().entity(), rows = rows.len(), "rows_loaded");
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(id).one(self.db.as_ref()).await?)
    }

    async fn insert(&self, item: E::Model) -> Result<E::Model, ServiceError> {
        Ok(full_active_model::<E>(&item).insert(self.db.as_ref()).await?)
    }

    async fn replace(&self, item: E::Model) -> Result<E::Model, ServiceError> {
        match full_active_model::<E>(&item).update(self.db.as_ref()).await {
            Ok(m) => Ok(m),
            Err(DbErr::RecordNotUpdated) => {
                Err(ServiceError::not_found(<E::Model as query::Queryable>::fields().entity()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = E::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{invoice, student};
    use models::{invoice as invoice_entity, student as student_entity};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn all_and_find_map_rows() -> Result<(), anyhow::Error> {
        let ada = student("S-001", "Ada", "Lovelace", 9);
        let alan = student("S-002", "Alan", "Turing", 10);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![ada.clone(), alan.clone()]])
            .append_query_results([vec![ada.clone()]])
            .into_connection();
        let repo = SeaOrmRepository::<student_entity::Entity>::new(Arc::new(db));

        assert_eq!(repo.all().await?, vec![ada.clone(), alan]);
        assert_eq!(repo.find(ada.id).await?, Some(ada));
        Ok(())
    }

    #[tokio::test]
    async fn insert_and_replace_return_stored_row() -> Result<(), anyhow::Error> {
        let inv = invoice(Uuid::new_v4(), "INV-1", 125_00, "Open");
        let mut paid = inv.clone();
        paid.status = "Paid".into();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![inv.clone()]])
            .append_query_results([vec![paid.clone()]])
            .into_connection();
        let repo = SeaOrmRepository::<invoice_entity::Entity>::new(Arc::new(db));

        assert_eq!(repo.insert(inv.clone()).await?, inv);
        assert_eq!(repo.replace(paid).await?.status, "Paid");
        Ok(())
    }

    #[tokio::test]
    async fn replace_without_matching_row_is_not_found() {
        let ada = student("S-001", "Ada", "Lovelace", 9);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<student_entity::Model>::new()])
            .into_connection();
        let repo = SeaOrmRepository::<student_entity::Entity>::new(Arc::new(db));

        assert!(matches!(repo.replace(ada).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn remove_reports_affected_rows() -> Result<(), anyhow::Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult { last_insert_id: 0, rows_affected: 1 },
                MockExecResult { last_insert_id: 0, rows_affected: 0 },
            ])
            .into_connection();
        let repo = SeaOrmRepository::<student_entity::Entity>::new(Arc::new(db));

        assert!(repo.remove(Uuid::new_v4()).await?);
        assert!(!repo.remove(Uuid::new_v4()).await?);
        Ok(())
    }
}
