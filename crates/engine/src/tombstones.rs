//! Deletion tombstones.
//!
//! Every deleted transaction leaves a row in `deleted_transactions` so the
//! sync exporter can propagate the deletion before the record vanishes for
//! good. Rows are removed only by explicit acknowledgement.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tombstone {
    pub transaction_id: i64,
    pub deleted_at: DateTime<Utc>,
    pub deleted_by: String,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "deleted_transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub transaction_id: i64,
    pub deleted_at: DateTimeUtc,
    pub deleted_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Tombstone> for ActiveModel {
    fn from(tombstone: &Tombstone) -> Self {
        Self {
            transaction_id: ActiveValue::Set(tombstone.transaction_id),
            deleted_at: ActiveValue::Set(tombstone.deleted_at),
            deleted_by: ActiveValue::Set(tombstone.deleted_by.clone()),
        }
    }
}

impl From<Model> for Tombstone {
    fn from(model: Model) -> Self {
        Self {
            transaction_id: model.transaction_id,
            deleted_at: model.deleted_at,
            deleted_by: model.deleted_by,
        }
    }
}
