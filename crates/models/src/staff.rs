use once_cell::sync::Lazy;
use query::{FieldRegistry, Queryable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub is_active: bool,
    pub hired_on: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

static FIELDS: Lazy<FieldRegistry<Model>> = Lazy::new(|| {
    FieldRegistry::<Model>::new("staff")
        .uuid("id", |m| m.id.into())
        .text("first_name", |m| m.first_name.clone().into())
        .text("last_name", |m| m.last_name.clone().into())
        .text("email", |m| m.email.clone().into())
        .text("department", |m| m.department.clone().into())
        .text("position", |m| m.position.clone().into())
        .boolean("is_active", |m| m.is_active.into())
        .date("hired_on", |m| m.hired_on.into())
        .timestamp("created_at", |m| m.created_at.into())
});

impl Queryable for Model {
    fn fields() -> &'static FieldRegistry<Self> { &FIELDS }
}

impl Record for Model {
    fn id(&self) -> Uuid { self.id }
    fn set_id(&mut self, id: Uuid) { self.id = id; }
}
