//! Physical ticket-book allocations.
//!
//! A `BookAllocation` records which sub-unit a physical book belongs to.
//! The book number is the natural key, so a book can never be claimed by
//! two sub-units at once.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAllocation {
    pub book_number: String,
    pub sub_unit_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub book_number: String,
    pub sub_unit_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sub_units::Entity",
        from = "Column::SubUnitName",
        to = "super::sub_units::Column::Name"
    )]
    SubUnits,
}

impl Related<super::sub_units::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubUnits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&BookAllocation> for ActiveModel {
    fn from(book: &BookAllocation) -> Self {
        Self {
            book_number: ActiveValue::Set(book.book_number.clone()),
            sub_unit_name: ActiveValue::Set(book.sub_unit_name.clone()),
            created_at: ActiveValue::Set(book.created_at),
        }
    }
}

impl From<Model> for BookAllocation {
    fn from(model: Model) -> Self {
        Self {
            book_number: model.book_number,
            sub_unit_name: model.sub_unit_name,
            created_at: model.created_at,
        }
    }
}
