//! Vehicle expense detail records.
//!
//! At most one detail row exists per vehicle-classified akhrajat line. Fuel
//! types carry a quantity, repairs carry the serviced part.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{LedgerError, VehicleExpenseType};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetail {
    pub expense_type: VehicleExpenseType,
    pub quantity: Option<i64>,
    pub part: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub akhrajat_id: i64,
    pub expense_type: String,
    pub quantity: Option<i64>,
    pub part: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::akhrajat::Entity",
        from = "Column::AkhrajatId",
        to = "super::akhrajat::Column::Id"
    )]
    Akhrajat,
}

impl Related<super::akhrajat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Akhrajat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl VehicleDetail {
    pub(crate) fn into_active_model(self, akhrajat_id: i64) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            akhrajat_id: ActiveValue::Set(akhrajat_id),
            expense_type: ActiveValue::Set(self.expense_type.as_str().to_string()),
            quantity: ActiveValue::Set(self.quantity),
            part: ActiveValue::Set(self.part),
        }
    }
}

impl TryFrom<Model> for VehicleDetail {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            expense_type: VehicleExpenseType::try_from(model.expense_type.as_str())?,
            quantity: model.quantity,
            part: model.part,
        })
    }
}
