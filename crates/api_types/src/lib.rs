use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod transaction {
    use super::*;

    /// Request body for creating a ledger transaction.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub zone: String,
        pub sub_unit: String,
        pub date: NaiveDate,
        pub book_number: String,
        pub start_number: i64,
        pub end_number: i64,
        pub count: i64,
        pub gross_income: i64,
        #[serde(default)]
        pub adjustment: i64,
        #[serde(default)]
        pub akhrajat: Vec<super::akhrajat::AkhrajatPayload>,
    }

    /// Partial update; only supplied fields change.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        pub zone: Option<String>,
        pub sub_unit: Option<String>,
        pub date: Option<NaiveDate>,
        pub book_number: Option<String>,
        pub gross_income: Option<i64>,
        pub adjustment: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TrollyView {
        pub start_number: i64,
        pub end_number: i64,
        pub count: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i64,
        pub zone: String,
        pub sub_unit: String,
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
        pub trolly: Option<TrollyView>,
        pub akhrajat: Vec<super::akhrajat::AkhrajatView>,
    }

    /// Query string for `GET /transactions`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionListQuery {
        pub zone: Option<String>,
        pub sub_unit: Option<String>,
        pub book_number: Option<String>,
        pub date_from: Option<NaiveDate>,
        pub date_to: Option<NaiveDate>,
        pub limit: Option<u64>,
    }

    /// Query string for `DELETE /transactions/{id}`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DeleteQuery {
        /// One of `single`, `from_ticket`, `whole_book`.
        pub mode: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DeletedResponse {
        /// Removed transaction ids, in deletion order (highest ticket first).
        pub deleted_ids: Vec<i64>,
    }

    /// Query string for `GET /tickets/next`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TicketPreviewQuery {
        pub sub_unit: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TicketPreviewView {
        pub book_number: String,
        pub ticket_number: i64,
    }
}

pub mod akhrajat {
    use super::*;

    /// One expense line as submitted by the caller.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AkhrajatPayload {
        pub title: String,
        pub description: Option<String>,
        pub amount: i64,
        /// Defaults to the parent transaction's date.
        pub date: Option<NaiveDate>,
        #[serde(default)]
        pub is_other: bool,
        pub other_title_id: Option<i64>,
        pub other_title: Option<String>,
        pub vehicle_detail: Option<VehicleDetailPayload>,
    }

    /// Request body for `POST /akhrajat`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AkhrajatNew {
        pub transaction_id: i64,
        #[serde(flatten)]
        pub payload: AkhrajatPayload,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VehicleDetailPayload {
        /// One of `petrol`, `diesel`, `mobil_oil`, `repair`.
        pub expense_type: String,
        pub quantity: Option<i64>,
        pub part: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AkhrajatView {
        pub id: i64,
        pub transaction_id: i64,
        pub title: String,
        pub description: Option<String>,
        pub amount: i64,
        pub date: NaiveDate,
        pub is_vehicle_expense: bool,
        pub is_other_expense: bool,
        pub other_title: Option<OtherTitleView>,
        pub vehicle_detail: Option<VehicleDetailView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct OtherTitleView {
        pub id: i64,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VehicleDetailView {
        pub expense_type: String,
        pub quantity: Option<i64>,
        pub part: Option<String>,
    }
}

pub mod zone {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ZoneNew {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ZoneView {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Rename {
        pub new_name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SubUnitNew {
        pub zone: String,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SubUnitView {
        pub zone: String,
        pub name: String,
    }

    /// Query string for `GET /sub-units`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SubUnitListQuery {
        pub zone: Option<String>,
    }
}

pub mod sync {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TombstoneView {
        pub transaction_id: i64,
        pub deleted_at: DateTime<Utc>,
        pub deleted_by: String,
    }

    /// Ids the exporter has finished propagating.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct IdBatch {
        pub ids: Vec<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AffectedResponse {
        pub affected: u64,
    }

    /// Query string for `GET /sync/pending`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PendingQuery {
        pub limit: Option<u64>,
    }
}
