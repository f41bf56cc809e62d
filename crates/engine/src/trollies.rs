//! Trolly trip-range records.
//!
//! Each transaction carries exactly one trolly row describing the trip
//! numbers the ticket covers; `count == end_number - start_number + 1`.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trolly {
    pub start_number: i64,
    pub end_number: i64,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trollies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub transaction_id: i64,
    pub start_number: i64,
    pub end_number: i64,
    pub count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transactions::Entity",
        from = "Column::TransactionId",
        to = "super::transactions::Column::Id"
    )]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Trolly {
    pub(crate) fn into_active_model(self, transaction_id: i64) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            transaction_id: ActiveValue::Set(transaction_id),
            start_number: ActiveValue::Set(self.start_number),
            end_number: ActiveValue::Set(self.end_number),
            count: ActiveValue::Set(self.count),
        }
    }
}

impl From<Model> for Trolly {
    fn from(model: Model) -> Self {
        Self {
            start_number: model.start_number,
            end_number: model.end_number,
            count: model.count,
        }
    }
}
