//! Book registry and ticket sequencing.
//!
//! A physical book belongs to exactly one sub-unit for its whole life and
//! holds at most [`MAX_TICKETS_PER_BOOK`] tickets, numbered gaplessly from 1.

use chrono::Utc;
use sea_orm::{
    DatabaseTransaction, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    BookAllocation, LedgerError, MAX_TICKETS_PER_BOOK, ResultLedger, books, transactions,
};

use super::{Engine, with_tx};

/// Advisory preview of the next ticket a sub-unit would receive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPreview {
    pub book_number: String,
    pub ticket_number: i64,
}

impl Engine {
    /// Claims the book for the sub-unit, or verifies an existing claim.
    pub(super) async fn allocate_or_validate_book(
        &self,
        db: &DatabaseTransaction,
        book_number: &str,
        sub_unit_name: &str,
    ) -> ResultLedger<()> {
        if let Some(existing) = books::Entity::find_by_id(book_number.to_string())
            .one(db)
            .await?
        {
            if existing.sub_unit_name != sub_unit_name {
                return Err(LedgerError::BookConflict {
                    book: book_number.to_string(),
                    owner: existing.sub_unit_name,
                });
            }
            return Ok(());
        }

        let allocation = BookAllocation {
            book_number: book_number.to_string(),
            sub_unit_name: sub_unit_name.to_string(),
            created_at: Utc::now(),
        };
        books::ActiveModel::from(&allocation).insert(db).await?;
        Ok(())
    }

    pub(super) async fn release_book(
        &self,
        db: &DatabaseTransaction,
        book_number: &str,
    ) -> ResultLedger<()> {
        books::Entity::delete_by_id(book_number.to_string())
            .exec(db)
            .await?;
        Ok(())
    }

    /// Next gapless ticket number for the (book, sub-unit) pair.
    ///
    /// Must run in the same DB transaction as the insert that consumes the
    /// number, otherwise two writers could claim the same ticket.
    pub(super) async fn next_ticket(
        &self,
        db: &DatabaseTransaction,
        book_number: &str,
        sub_unit_name: &str,
    ) -> ResultLedger<i64> {
        let used = transactions::Entity::find()
            .filter(transactions::Column::BookNumber.eq(book_number.to_string()))
            .filter(transactions::Column::SubUnitName.eq(sub_unit_name.to_string()))
            .count(db)
            .await?;
        let used = i64::try_from(used).unwrap_or(i64::MAX);
        if used >= MAX_TICKETS_PER_BOOK {
            return Err(LedgerError::BookFull(book_number.to_string()));
        }
        Ok(used + 1)
    }

    /// Read-only preview of the ticket the sub-unit's most recent book would
    /// hand out next. `None` when no book is allocated or the book is full.
    pub async fn next_ticket_preview(
        &self,
        sub_unit: &str,
    ) -> ResultLedger<Option<TicketPreview>> {
        with_tx!(self, |db_tx| {
            self.require_sub_unit_any_zone(&db_tx, sub_unit).await?;

            let book = books::Entity::find()
                .filter(books::Column::SubUnitName.eq(sub_unit.to_string()))
                .order_by_desc(books::Column::CreatedAt)
                .order_by_desc(books::Column::BookNumber)
                .one(&db_tx)
                .await?;

            match book {
                None => Ok(None),
                Some(book) => {
                    match self.next_ticket(&db_tx, &book.book_number, sub_unit).await {
                        Ok(ticket_number) => Ok(Some(TicketPreview {
                            book_number: book.book_number,
                            ticket_number,
                        })),
                        Err(LedgerError::BookFull(_)) => Ok(None),
                        Err(err) => Err(err),
                    }
                }
            }
        })
    }
}
