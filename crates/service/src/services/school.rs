//! Per-entity service aliases and the bundle that wires them to one database.

use std::sync::Arc;

use configs::DatabaseConfig;
use models::{
    academic_session, account_reconciliation, db::connect_with_config, invoice, parent_guardian, staff, student,
    time_off_request,
};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::repo::SeaOrmRepository;
use crate::services::entity_service::EntityService;

pub type AcademicSessionService =
    EntityService<academic_session::Model, SeaOrmRepository<academic_session::Entity>>;
pub type AccountReconciliationService =
    EntityService<account_reconciliation::Model, SeaOrmRepository<account_reconciliation::Entity>>;
pub type InvoiceService = EntityService<invoice::Model, SeaOrmRepository<invoice::Entity>>;
pub type ParentGuardianService = EntityService<parent_guardian::Model, SeaOrmRepository<parent_guardian::Entity>>;
pub type StaffService = EntityService<staff::Model, SeaOrmRepository<staff::Entity>>;
pub type StudentService = EntityService<student::Model, SeaOrmRepository<student::Entity>>;
pub type TimeOffRequestService =
    EntityService<time_off_request::Model, SeaOrmRepository<time_off_request::Entity>>;

fn table_service<E: sea_orm::EntityTrait, T: models::Record>(db: &Arc<DatabaseConnection>) -> EntityService<T, SeaOrmRepository<E>>
where
    SeaOrmRepository<E>: crate::repository::Repository<T>,
{
    EntityService::new(Arc::new(SeaOrmRepository::new(Arc::clone(db))))
}

/// Every school entity service, sharing one connection pool.
#[derive(Clone)]
pub struct SchoolServices {
    pub academic_sessions: AcademicSessionService,
    pub account_reconciliations: AccountReconciliationService,
    pub invoices: InvoiceService,
    pub parent_guardians: ParentGuardianService,
    pub staff: StaffService,
    pub students: StudentService,
    pub time_off_requests: TimeOffRequestService,
}

impl SchoolServices {
    pub fn new(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        Self {
            academic_sessions: table_service(&db),
            account_reconciliations: table_service(&db),
            invoices: table_service(&db),
            parent_guardians: table_service(&db),
            staff: table_service(&db),
            students: table_service(&db),
            time_off_requests: table_service(&db),
        }
    }

    pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        let db = connect_with_config(cfg).await?;
        info!("school_services_ready");
        Ok(Self::new(db))
    }
}
