//! Academic session (school year or term).
use once_cell::sync::Lazy;
use query::{FieldRegistry, Queryable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "academic_session")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub is_current: bool,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

static FIELDS: Lazy<FieldRegistry<Model>> = Lazy::new(|| {
    FieldRegistry::<Model>::new("academic_session")
        .uuid("id", |m| m.id.into())
        .text("name", |m| m.name.clone().into())
        .date("start_date", |m| m.start_date.into())
        .date("end_date", |m| m.end_date.into())
        .boolean("is_current", |m| m.is_current.into())
        .text("status", |m| m.status.clone().into())
        .timestamp("created_at", |m| m.created_at.into())
});

impl Queryable for Model {
    fn fields() -> &'static FieldRegistry<Self> { &FIELDS }
}

impl Record for Model {
    fn id(&self) -> Uuid { self.id }
    fn set_id(&mut self, id: Uuid) { self.id = id; }
}
