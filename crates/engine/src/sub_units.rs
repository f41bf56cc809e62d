//! Sub-unit ("khda") records.
//!
//! A sub-unit is a collection point inside a zone. Its Urdu name is the
//! natural key; book allocations and transactions reference it by name.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubUnit {
    pub name: String,
    pub zone_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sub_units")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub zone_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::zones::Entity",
        from = "Column::ZoneName",
        to = "super::zones::Column::Name"
    )]
    Zones,
    #[sea_orm(has_many = "super::books::Entity")]
    Books,
}

impl Related<super::zones::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Zones.def()
    }
}

impl Related<super::books::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&SubUnit> for ActiveModel {
    fn from(sub_unit: &SubUnit) -> Self {
        Self {
            name: ActiveValue::Set(sub_unit.name.clone()),
            zone_name: ActiveValue::Set(sub_unit.zone_name.clone()),
            created_at: ActiveValue::Set(sub_unit.created_at),
        }
    }
}

impl From<Model> for SubUnit {
    fn from(model: Model) -> Self {
        Self {
            name: model.name,
            zone_name: model.zone_name,
            created_at: model.created_at,
        }
    }
}
