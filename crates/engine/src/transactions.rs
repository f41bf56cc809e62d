//! Ledger transaction primitives.
//!
//! A `Transaction` is one day's gross income for a ticket in a book, with
//! its denormalized totals, its trolly trip range and its akhrajat lines.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use super::akhrajat::Akhrajat;
use super::trollies::Trolly;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub zone_name: String,
    pub sub_unit_name: String,
    pub date: NaiveDate,
    pub book_number: String,
    pub ticket_number: i64,
    pub gross_income: i64,
    pub total_expense: i64,
    pub net_income: i64,
    pub adjustment: i64,
    pub final_balance: i64,
    pub created_by: String,
    pub synced: bool,
    pub synced_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub trolly: Option<Trolly>,
    pub akhrajat: Vec<Akhrajat>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub zone_name: String,
    pub sub_unit_name: String,
    pub date: Date,
    pub book_number: String,
    pub ticket_number: i64,
    pub gross_income: i64,
    pub total_expense: i64,
    pub net_income: i64,
    pub adjustment: i64,
    pub final_balance: i64,
    pub created_by: String,
    pub synced: bool,
    pub synced_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trollies::Entity")]
    Trollies,
    #[sea_orm(has_many = "super::akhrajat::Entity")]
    Akhrajat,
    #[sea_orm(
        belongs_to = "super::sub_units::Entity",
        from = "Column::SubUnitName",
        to = "super::sub_units::Column::Name"
    )]
    SubUnits,
}

impl Related<super::trollies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trollies.def()
    }
}

impl Related<super::akhrajat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Akhrajat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::NotSet,
            zone_name: ActiveValue::Set(tx.zone_name.clone()),
            sub_unit_name: ActiveValue::Set(tx.sub_unit_name.clone()),
            date: ActiveValue::Set(tx.date),
            book_number: ActiveValue::Set(tx.book_number.clone()),
            ticket_number: ActiveValue::Set(tx.ticket_number),
            gross_income: ActiveValue::Set(tx.gross_income),
            total_expense: ActiveValue::Set(tx.total_expense),
            net_income: ActiveValue::Set(tx.net_income),
            adjustment: ActiveValue::Set(tx.adjustment),
            final_balance: ActiveValue::Set(tx.final_balance),
            created_by: ActiveValue::Set(tx.created_by.clone()),
            synced: ActiveValue::Set(tx.synced),
            synced_at: ActiveValue::Set(tx.synced_at),
            created_at: ActiveValue::Set(tx.created_at),
        }
    }
}

impl From<Model> for Transaction {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            zone_name: model.zone_name,
            sub_unit_name: model.sub_unit_name,
            date: model.date,
            book_number: model.book_number,
            ticket_number: model.ticket_number,
            gross_income: model.gross_income,
            total_expense: model.total_expense,
            net_income: model.net_income,
            adjustment: model.adjustment,
            final_balance: model.final_balance,
            created_by: model.created_by,
            synced: model.synced,
            synced_at: model.synced_at,
            created_at: model.created_at,
            trolly: None,
            akhrajat: Vec::new(),
        }
    }
}
