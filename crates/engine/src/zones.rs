//! Zone records.
//!
//! A `Zone` is a top-level collection area; its Urdu name is the natural key
//! and is referenced by sub-units and transactions.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "zones")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sub_units::Entity")]
    SubUnits,
}

impl Related<super::sub_units::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubUnits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Zone> for ActiveModel {
    fn from(zone: &Zone) -> Self {
        Self {
            name: ActiveValue::Set(zone.name.clone()),
            created_at: ActiveValue::Set(zone.created_at),
        }
    }
}

impl From<Model> for Zone {
    fn from(model: Model) -> Self {
        Self {
            name: model.name,
            created_at: model.created_at,
        }
    }
}
