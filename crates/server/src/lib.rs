use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::LedgerError;

use serde::Serialize;
pub use server::{Operator, ServerState, router, run, run_with_listener, spawn_with_listener};

mod akhrajat;
mod server;
mod sync;
mod transactions;
mod zones;

pub mod types {
    pub mod transaction {
        pub use api_types::transaction::{
            DeleteQuery, DeletedResponse, TicketPreviewQuery, TicketPreviewView,
            TransactionListQuery, TransactionNew, TransactionUpdate, TransactionView, TrollyView,
        };
    }

    pub mod akhrajat {
        pub use api_types::akhrajat::{
            AkhrajatNew, AkhrajatPayload, AkhrajatView, OtherTitleView, VehicleDetailPayload,
            VehicleDetailView,
        };
    }

    pub mod zone {
        pub use api_types::zone::{Rename, SubUnitListQuery, SubUnitNew, SubUnitView, ZoneNew, ZoneView};
    }

    pub mod sync {
        pub use api_types::sync::{AffectedResponse, IdBatch, PendingQuery, TombstoneView};
    }
}

pub enum ServerError {
    Engine(LedgerError),
    Generic(String),
}

//TODO: Find a better solution
#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::BookConflict { .. } => StatusCode::CONFLICT,
        LedgerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        LedgerError::Validation(_)
        | LedgerError::BookFull(_)
        | LedgerError::InvalidTitle(_)
        | LedgerError::IncompleteVehicleDetail(_)
        | LedgerError::UnknownOtherTitle(_)
        | LedgerError::MissingOtherSubtitle => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: LedgerError) -> String {
    match err {
        LedgerError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(LedgerError::NotFound("transaction".to_string()))
            .into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_book_conflict_maps_to_409() {
        let res = ServerError::from(LedgerError::BookConflict {
            book: "K-1".to_string(),
            owner: "x".to_string(),
        })
        .into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn engine_book_full_maps_to_422() {
        let res = ServerError::from(LedgerError::BookFull("K-1".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        let res = ServerError::from(LedgerError::Validation("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn engine_expense_shape_errors_map_to_422() {
        for err in [
            LedgerError::InvalidTitle("chai".to_string()),
            LedgerError::IncompleteVehicleDetail("diesel".to_string()),
            LedgerError::UnknownOtherTitle(7),
            LedgerError::MissingOtherSubtitle,
        ] {
            let res = ServerError::from(err).into_response();
            assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
