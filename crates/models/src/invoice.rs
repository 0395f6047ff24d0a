//! Tuition/fee invoice billed to a student's account.
use once_cell::sync::Lazy;
use query::{FieldRegistry, Queryable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoice")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub invoice_number: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub due_date: Date,
    pub status: String,
    pub issued_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef { Relation::Student.def() }
}

impl ActiveModelBehavior for ActiveModel {}

static FIELDS: Lazy<FieldRegistry<Model>> = Lazy::new(|| {
    FieldRegistry::<Model>::new("invoice")
        .uuid("id", |m| m.id.into())
        .uuid("student_id", |m| m.student_id.into())
        .text("invoice_number", |m| m.invoice_number.clone().into())
        .text("description", |m| m.description.clone().into())
        .integer("amount_cents", |m| m.amount_cents.into())
        .date("due_date", |m| m.due_date.into())
        .text("status", |m| m.status.clone().into())
        .timestamp("issued_at", |m| m.issued_at.into())
});

impl Queryable for Model {
    fn fields() -> &'static FieldRegistry<Self> { &FIELDS }
}

impl Record for Model {
    fn id(&self) -> Uuid { self.id }
    fn set_id(&mut self, id: Uuid) { self.id = id; }
}
