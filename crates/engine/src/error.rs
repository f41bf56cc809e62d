//! The module contains the error the engine can throw.
//!
//! The errors split into caller faults (validation, taxonomy, missing
//! records), domain conflicts (book ownership and capacity) and database
//! failures.
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Book \"{book}\" already belongs to \"{owner}\"")]
    BookConflict { book: String, owner: String },
    #[error("Book \"{0}\" is full")]
    BookFull(String),
    #[error("Invalid akhrajat title: {0}")]
    InvalidTitle(String),
    #[error("Incomplete vehicle detail: {0}")]
    IncompleteVehicleDetail(String),
    #[error("Other-expense title {0} not exists")]
    UnknownOtherTitle(i64),
    #[error("Other-classified akhrajat requires a sub-title")]
    MissingOtherSubtitle,
    #[error("\"{0}\" not exists")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (
                Self::BookConflict { book: a, owner: x },
                Self::BookConflict { book: b, owner: y },
            ) => a == b && x == y,
            (Self::BookFull(a), Self::BookFull(b)) => a == b,
            (Self::InvalidTitle(a), Self::InvalidTitle(b)) => a == b,
            (Self::IncompleteVehicleDetail(a), Self::IncompleteVehicleDetail(b)) => a == b,
            (Self::UnknownOtherTitle(a), Self::UnknownOtherTitle(b)) => a == b,
            (Self::MissingOtherSubtitle, Self::MissingOtherSubtitle) => true,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
