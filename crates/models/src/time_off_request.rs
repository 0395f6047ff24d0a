//! Staff request for leave, reviewed by an administrator.
use once_cell::sync::Lazy;
use query::{FieldRegistry, Queryable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "time_off_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub staff_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
    pub hours: f64,
    pub reason: Option<String>,
    pub status: String,
    pub submitted_at: DateTimeWithTimeZone,
    pub reviewed_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::StaffId",
        to = "super::staff::Column::Id"
    )]
    Staff,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef { Relation::Staff.def() }
}

impl ActiveModelBehavior for ActiveModel {}

static FIELDS: Lazy<FieldRegistry<Model>> = Lazy::new(|| {
    FieldRegistry::<Model>::new("time_off_request")
        .uuid("id", |m| m.id.into())
        .uuid("staff_id", |m| m.staff_id.into())
        .date("start_date", |m| m.start_date.into())
        .date("end_date", |m| m.end_date.into())
        .float("hours", |m| m.hours.into())
        .text("reason", |m| m.reason.clone().into())
        .text("status", |m| m.status.clone().into())
        .timestamp("submitted_at", |m| m.submitted_at.into())
        .timestamp("reviewed_at", |m| m.reviewed_at.into())
});

impl Queryable for Model {
    fn fields() -> &'static FieldRegistry<Self> { &FIELDS }
}

impl Record for Model {
    fn id(&self) -> Uuid { self.id }
    fn set_id(&mut self, id: Uuid) { self.id = id; }
}
