//! Command structs for engine operations.
//!
//! These types group parameters for write operations (create/update/delete
//! and expense edits), keeping call sites readable and avoiding long
//! argument lists.

use chrono::NaiveDate;

use crate::LedgerError;

/// Trip range covered by one ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TripRange {
    pub start_number: i64,
    pub end_number: i64,
    pub count: i64,
}

/// Create a ledger transaction.
#[derive(Clone, Debug)]
pub struct CreateTransactionCmd {
    pub zone: String,
    pub sub_unit: String,
    pub date: NaiveDate,
    pub book_number: String,
    pub trip: Option<TripRange>,
    pub gross_income: i64,
    pub adjustment: i64,
    pub akhrajat: Vec<AkhrajatInput>,
    pub created_by: String,
}

impl CreateTransactionCmd {
    #[must_use]
    pub fn new(
        zone: impl Into<String>,
        sub_unit: impl Into<String>,
        date: NaiveDate,
        book_number: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            zone: zone.into(),
            sub_unit: sub_unit.into(),
            date,
            book_number: book_number.into(),
            trip: None,
            gross_income: 0,
            adjustment: 0,
            akhrajat: Vec::new(),
            created_by: created_by.into(),
        }
    }

    #[must_use]
    pub fn trip(mut self, start_number: i64, end_number: i64, count: i64) -> Self {
        self.trip = Some(TripRange {
            start_number,
            end_number,
            count,
        });
        self
    }

    #[must_use]
    pub fn gross_income(mut self, gross_income: i64) -> Self {
        self.gross_income = gross_income;
        self
    }

    #[must_use]
    pub fn adjustment(mut self, adjustment: i64) -> Self {
        self.adjustment = adjustment;
        self
    }

    #[must_use]
    pub fn akhrajat(mut self, input: AkhrajatInput) -> Self {
        self.akhrajat.push(input);
        self
    }
}

/// Update an existing transaction. Only supplied fields change.
#[derive(Clone, Debug)]
pub struct UpdateTransactionCmd {
    pub transaction_id: i64,

    pub zone: Option<String>,
    pub sub_unit: Option<String>,
    pub date: Option<NaiveDate>,
    pub book_number: Option<String>,
    pub gross_income: Option<i64>,
    pub adjustment: Option<i64>,
}

impl UpdateTransactionCmd {
    #[must_use]
    pub fn new(transaction_id: i64) -> Self {
        Self {
            transaction_id,
            zone: None,
            sub_unit: None,
            date: None,
            book_number: None,
            gross_income: None,
            adjustment: None,
        }
    }

    #[must_use]
    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    #[must_use]
    pub fn sub_unit(mut self, sub_unit: impl Into<String>) -> Self {
        self.sub_unit = Some(sub_unit.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn book_number(mut self, book_number: impl Into<String>) -> Self {
        self.book_number = Some(book_number.into());
        self
    }

    #[must_use]
    pub fn gross_income(mut self, gross_income: i64) -> Self {
        self.gross_income = Some(gross_income);
        self
    }

    #[must_use]
    pub fn adjustment(mut self, adjustment: i64) -> Self {
        self.adjustment = Some(adjustment);
        self
    }
}

/// One expense line as supplied by the caller, before resolution.
#[derive(Clone, Debug)]
pub struct AkhrajatInput {
    pub title: String,
    pub description: Option<String>,
    pub amount: i64,
    /// Defaults to the parent transaction's date.
    pub date: Option<NaiveDate>,
    /// Explicit request for the "other" classification.
    pub is_other: bool,
    pub other_title_id: Option<i64>,
    pub other_title: Option<String>,
    pub vehicle_detail: Option<VehicleDetailInput>,
}

impl AkhrajatInput {
    #[must_use]
    pub fn new(title: impl Into<String>, amount: i64) -> Self {
        Self {
            title: title.into(),
            description: None,
            amount,
            date: None,
            is_other: false,
            other_title_id: None,
            other_title: None,
            vehicle_detail: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn other(mut self) -> Self {
        self.is_other = true;
        self
    }

    #[must_use]
    pub fn other_title_id(mut self, id: i64) -> Self {
        self.is_other = true;
        self.other_title_id = Some(id);
        self
    }

    #[must_use]
    pub fn other_title(mut self, title: impl Into<String>) -> Self {
        self.is_other = true;
        self.other_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn vehicle_detail(mut self, detail: VehicleDetailInput) -> Self {
        self.vehicle_detail = Some(detail);
        self
    }
}

/// Vehicle detail sub-payload, before resolution.
#[derive(Clone, Debug)]
pub struct VehicleDetailInput {
    pub expense_type: String,
    pub quantity: Option<i64>,
    pub part: Option<String>,
}

impl VehicleDetailInput {
    #[must_use]
    pub fn new(expense_type: impl Into<String>) -> Self {
        Self {
            expense_type: expense_type.into(),
            quantity: None,
            part: None,
        }
    }

    #[must_use]
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn part(mut self, part: impl Into<String>) -> Self {
        self.part = Some(part.into());
        self
    }
}

/// How much of a book a delete call removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteMode {
    /// The target ticket only; it must be the highest in its book.
    Single,
    /// The target ticket and every higher ticket in the same book.
    FromTicket,
    /// Every ticket in the book, releasing the allocation.
    WholeBook,
}

impl DeleteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::FromTicket => "from_ticket",
            Self::WholeBook => "whole_book",
        }
    }
}

impl TryFrom<&str> for DeleteMode {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "single" => Ok(Self::Single),
            "from_ticket" => Ok(Self::FromTicket),
            "whole_book" => Ok(Self::WholeBook),
            other => Err(LedgerError::Validation(format!(
                "invalid delete mode: {other}"
            ))),
        }
    }
}

/// Filters for transaction listing. All fields are optional and conjunctive.
#[derive(Clone, Debug, Default)]
pub struct TransactionFilter {
    pub zone: Option<String>,
    pub sub_unit: Option<String>,
    pub book_number: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: Option<u64>,
}

impl TransactionFilter {
    #[must_use]
    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    #[must_use]
    pub fn sub_unit(mut self, sub_unit: impl Into<String>) -> Self {
        self.sub_unit = Some(sub_unit.into());
        self
    }

    #[must_use]
    pub fn book_number(mut self, book_number: impl Into<String>) -> Self {
        self.book_number = Some(book_number.into());
        self
    }

    #[must_use]
    pub fn date_from(mut self, date_from: NaiveDate) -> Self {
        self.date_from = Some(date_from);
        self
    }

    #[must_use]
    pub fn date_to(mut self, date_to: NaiveDate) -> Self {
        self.date_to = Some(date_to);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}
