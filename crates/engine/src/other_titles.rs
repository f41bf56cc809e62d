//! Free-form "other" expense titles.
//!
//! Titles are shared across transactions and resolved get-or-create by name,
//! so the same label never produces two rows.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherTitle {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "other_titles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::akhrajat::Entity")]
    Akhrajat,
}

impl Related<super::akhrajat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Akhrajat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl OtherTitle {
    pub(crate) fn insert_model(name: String) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
        }
    }
}

impl From<Model> for OtherTitle {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
