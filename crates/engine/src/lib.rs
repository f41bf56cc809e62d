//! Ledger engine for a revenue-collection bookkeeping system.
//!
//! The engine owns the database and exposes the domain operations: ledger
//! transactions against physical ticket books, akhrajat (expense) lines with
//! their classifications, the zone/sub-unit geography and the sync
//! reconciliation surface.

pub use akhrajat::{Akhrajat, AkhrajatKind};
pub use books::BookAllocation;
pub use commands::{
    AkhrajatInput, CreateTransactionCmd, DeleteMode, TransactionFilter, TripRange,
    UpdateTransactionCmd, VehicleDetailInput,
};
pub use error::LedgerError;
pub use ops::{Engine, EngineBuilder, TicketPreview};
pub use other_titles::OtherTitle;
pub use sub_units::SubUnit;
pub use titles::{AkhrajatTitle, VehicleExpenseType};
pub use tombstones::Tombstone;
pub use transactions::Transaction;
pub use trollies::Trolly;
pub use vehicle_details::VehicleDetail;
pub use zones::Zone;

mod akhrajat;
mod books;
mod commands;
mod error;
mod ops;
mod other_titles;
mod script;
mod sub_units;
mod titles;
mod tombstones;
mod transactions;
mod trollies;
mod vehicle_details;
mod zones;

pub(crate) type ResultLedger<T> = Result<T, LedgerError>;

/// Hard cap on tickets per physical book.
pub const MAX_TICKETS_PER_BOOK: i64 = 100;
