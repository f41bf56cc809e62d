//! Akhrajat (expense) line records.
//!
//! Each line belongs to one transaction and carries a title from the fixed
//! taxonomy. Its classification is structural: plain, vehicle (optionally
//! with a detail sub-record) or other (a reference into `other_titles`).

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{AkhrajatTitle, LedgerError, VehicleDetail, other_titles, vehicle_details};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AkhrajatKind {
    Plain,
    Vehicle { detail: Option<VehicleDetail> },
    Other { title_id: i64, title: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Akhrajat {
    pub id: i64,
    pub transaction_id: i64,
    pub title: AkhrajatTitle,
    pub description: Option<String>,
    pub amount: i64,
    pub date: NaiveDate,
    pub kind: AkhrajatKind,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "akhrajat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub transaction_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub amount: i64,
    pub date: Date,
    pub is_vehicle_expense: bool,
    pub is_other_expense: bool,
    pub other_title_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transactions::Entity",
        from = "Column::TransactionId",
        to = "super::transactions::Column::Id"
    )]
    Transactions,
    #[sea_orm(
        belongs_to = "super::other_titles::Entity",
        from = "Column::OtherTitleId",
        to = "super::other_titles::Column::Id"
    )]
    OtherTitles,
    #[sea_orm(has_many = "super::vehicle_details::Entity")]
    VehicleDetails,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl Related<super::vehicle_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleDetails.def()
    }
}

impl Related<super::other_titles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OtherTitles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Akhrajat {
    /// Builds the domain view from a row plus its optional satellites.
    pub(crate) fn assemble(
        model: Model,
        detail: Option<vehicle_details::Model>,
        other_title: Option<other_titles::Model>,
    ) -> Result<Self, LedgerError> {
        let title = AkhrajatTitle::try_from(model.title.as_str())?;
        let kind = if model.is_other_expense {
            let title_row = other_title.ok_or_else(|| {
                LedgerError::NotFound("other-expense title".to_string())
            })?;
            AkhrajatKind::Other {
                title_id: title_row.id,
                title: title_row.name,
            }
        } else if model.is_vehicle_expense {
            AkhrajatKind::Vehicle {
                detail: detail.map(VehicleDetail::try_from).transpose()?,
            }
        } else {
            AkhrajatKind::Plain
        };
        Ok(Self {
            id: model.id,
            transaction_id: model.transaction_id,
            title,
            description: model.description,
            amount: model.amount,
            date: model.date,
            kind,
        })
    }
}

/// Column values for a new row, before the transaction id is known.
#[derive(Clone, Debug)]
pub(crate) struct AkhrajatRow {
    pub title: AkhrajatTitle,
    pub description: Option<String>,
    pub amount: i64,
    pub date: NaiveDate,
    pub is_vehicle_expense: bool,
    pub is_other_expense: bool,
    pub other_title_id: Option<i64>,
    pub detail: Option<VehicleDetail>,
}

impl AkhrajatRow {
    pub(crate) fn active_model(&self, transaction_id: i64) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            transaction_id: ActiveValue::Set(transaction_id),
            title: ActiveValue::Set(self.title.as_str().to_string()),
            description: ActiveValue::Set(self.description.clone()),
            amount: ActiveValue::Set(self.amount),
            date: ActiveValue::Set(self.date),
            is_vehicle_expense: ActiveValue::Set(self.is_vehicle_expense),
            is_other_expense: ActiveValue::Set(self.is_other_expense),
            other_title_id: ActiveValue::Set(self.other_title_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Related;

    use super::Entity;

    // Both sides of every declared relation must have a `Related` impl,
    // or the derive on the far entity fails to expand.
    #[test]
    fn entity_is_related_to_all_satellites() {
        let _ = <Entity as Related<crate::transactions::Entity>>::to();
        let _ = <Entity as Related<crate::vehicle_details::Entity>>::to();
        let _ = <Entity as Related<crate::other_titles::Entity>>::to();
    }
}
