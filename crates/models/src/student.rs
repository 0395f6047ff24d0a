use once_cell::sync::Lazy;
use query::{FieldRegistry, Queryable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub grade_level: i32,
    pub enrollment_status: String,
    pub date_of_birth: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

static FIELDS: Lazy<FieldRegistry<Model>> = Lazy::new(|| {
    FieldRegistry::<Model>::new("student")
        .uuid("id", |m| m.id.into())
        .text("student_number", |m| m.student_number.clone().into())
        .text("first_name", |m| m.first_name.clone().into())
        .text("last_name", |m| m.last_name.clone().into())
        .text("email", |m| m.email.clone().into())
        .integer("grade_level", |m| m.grade_level.into())
        .text("enrollment_status", |m| m.enrollment_status.clone().into())
        .date("date_of_birth", |m| m.date_of_birth.into())
        .timestamp("created_at", |m| m.created_at.into())
});

impl Queryable for Model {
    fn fields() -> &'static FieldRegistry<Self> { &FIELDS }
}

impl Record for Model {
    fn id(&self) -> Uuid { self.id }
    fn set_id(&mut self, id: Uuid) { self.id = id; }
}
