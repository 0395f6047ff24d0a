//! Monthly reconciliation of a ledger account against its bank statement.
use once_cell::sync::Lazy;
use query::{FieldRegistry, Queryable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account_reconciliation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub account_name: String,
    pub period_start: Date,
    pub period_end: Date,
    pub statement_balance_cents: i64,
    pub ledger_balance_cents: i64,
    pub status: String,
    pub reconciled_at: Option<DateTimeWithTimeZone>,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Statement minus ledger; zero once the account is reconciled.
    pub fn difference_cents(&self) -> i64 {
        self.statement_balance_cents - self.ledger_balance_cents
    }
}

static FIELDS: Lazy<FieldRegistry<Model>> = Lazy::new(|| {
    FieldRegistry::<Model>::new("account_reconciliation")
        .uuid("id", |m| m.id.into())
        .text("account_name", |m| m.account_name.clone().into())
        .date("period_start", |m| m.period_start.into())
        .date("period_end", |m| m.period_end.into())
        .integer("statement_balance_cents", |m| m.statement_balance_cents.into())
        .integer("ledger_balance_cents", |m| m.ledger_balance_cents.into())
        .text("status", |m| m.status.clone().into())
        .timestamp("reconciled_at", |m| m.reconciled_at.into())
        .text("notes", |m| m.notes.clone().into())
        .timestamp("created_at", |m| m.created_at.into())
});

impl Queryable for Model {
    fn fields() -> &'static FieldRegistry<Self> { &FIELDS }
}

impl Record for Model {
    fn id(&self) -> Uuid { self.id }
    fn set_id(&mut self, id: Uuid) { self.id = id; }
}
