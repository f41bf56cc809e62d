use chrono::Utc;
use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    DeleteMode, LedgerError, ResultLedger, Tombstone, akhrajat, tombstones, transactions,
    trollies, vehicle_details,
};

use super::super::{Engine, normalize_required_name, with_tx};

impl Engine {
    /// Deletes tickets from a book, highest ticket first, leaving one
    /// tombstone per removed transaction.
    ///
    /// `Single` removes the target only and requires it to be the highest
    /// ticket in its book, so the remaining tickets stay gapless.
    /// `FromTicket` removes the target and everything above it.
    /// `WholeBook` removes every ticket and releases the book allocation.
    ///
    /// Returns the removed transaction ids in deletion order.
    pub async fn delete_transaction(
        &self,
        transaction_id: i64,
        mode: DeleteMode,
        deleted_by: &str,
    ) -> ResultLedger<Vec<i64>> {
        let deleted_by = normalize_required_name(deleted_by, "deleted_by")?;

        with_tx!(self, |db_tx| {
            let target = transactions::Entity::find_by_id(transaction_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("transaction".to_string()))?;

            let victims = match mode {
                DeleteMode::Single => {
                    let highest = transactions::Entity::find()
                        .filter(transactions::Column::BookNumber.eq(target.book_number.clone()))
                        .order_by_desc(transactions::Column::TicketNumber)
                        .one(&db_tx)
                        .await?;
                    if highest.map(|m| m.id) != Some(target.id) {
                        return Err(LedgerError::Validation(
                            "only the highest ticket in a book can be deleted singly"
                                .to_string(),
                        ));
                    }
                    vec![target.clone()]
                }
                DeleteMode::FromTicket => {
                    transactions::Entity::find()
                        .filter(transactions::Column::BookNumber.eq(target.book_number.clone()))
                        .filter(
                            transactions::Column::TicketNumber.gte(target.ticket_number),
                        )
                        .order_by_desc(transactions::Column::TicketNumber)
                        .all(&db_tx)
                        .await?
                }
                DeleteMode::WholeBook => {
                    transactions::Entity::find()
                        .filter(transactions::Column::BookNumber.eq(target.book_number.clone()))
                        .order_by_desc(transactions::Column::TicketNumber)
                        .all(&db_tx)
                        .await?
                }
            };

            let now = Utc::now();
            let mut deleted_ids = Vec::with_capacity(victims.len());
            for victim in victims {
                let tombstone = Tombstone {
                    transaction_id: victim.id,
                    deleted_at: now,
                    deleted_by: deleted_by.clone(),
                };
                tombstones::ActiveModel::from(&tombstone).insert(&db_tx).await?;

                let line_ids: Vec<i64> = akhrajat::Entity::find()
                    .filter(akhrajat::Column::TransactionId.eq(victim.id))
                    .all(&db_tx)
                    .await?
                    .into_iter()
                    .map(|line| line.id)
                    .collect();
                if !line_ids.is_empty() {
                    vehicle_details::Entity::delete_many()
                        .filter(vehicle_details::Column::AkhrajatId.is_in(line_ids))
                        .exec(&db_tx)
                        .await?;
                }
                akhrajat::Entity::delete_many()
                    .filter(akhrajat::Column::TransactionId.eq(victim.id))
                    .exec(&db_tx)
                    .await?;
                trollies::Entity::delete_many()
                    .filter(trollies::Column::TransactionId.eq(victim.id))
                    .exec(&db_tx)
                    .await?;
                transactions::Entity::delete_by_id(victim.id).exec(&db_tx).await?;

                deleted_ids.push(victim.id);
            }

            if mode == DeleteMode::WholeBook {
                self.release_book(&db_tx, &target.book_number).await?;
            }

            Ok(deleted_ids)
        })
    }
}
