//! Parent or guardian contact attached to a student.
use once_cell::sync::Lazy;
use query::{FieldRegistry, Queryable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parent_guardian")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_primary_contact: bool,
    pub created_at: DateTimeWithTimeZone,
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
    FieldRegistry::<Model>::new("parent_guardian")
        .uuid("id", |m| m.id.into())
        .uuid("student_id", |m| m.student_id.into())
        .text("first_name", |m| m.first_name.clone().into())
        .text("last_name", |m| m.last_name.clone().into())
        .text("relationship", |m| m.relationship.clone().into())
        .text("email", |m| m.email.clone().into())
        .text("phone", |m| m.phone.clone().into())
        .boolean("is_primary_contact", |m| m.is_primary_contact.into())
        .timestamp("created_at", |m| m.created_at.into())
});

impl Queryable for Model {
    fn fields() -> &'static FieldRegistry<Self> { &FIELDS }
}

impl Record for Model {
    fn id(&self) -> Uuid { self.id }
    fn set_id(&mut self, id: Uuid) { self.id = id; }
}
