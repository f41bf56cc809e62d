//! Denormalized totals.
//!
//! `total_expense`, `net_income` and `final_balance` are stored on the
//! transaction row and recomputed from the akhrajat lines after every
//! mutation. Recomputing also resets the sync flags, since any write makes
//! the previously exported snapshot stale.

use sea_orm::{ActiveValue, DatabaseTransaction, QueryFilter, prelude::*};

use crate::{LedgerError, ResultLedger, akhrajat, transactions};

use super::Engine;

impl Engine {
    pub(super) async fn recompute_totals(
        &self,
        db: &DatabaseTransaction,
        transaction_id: i64,
    ) -> ResultLedger<transactions::Model> {
        let tx_model = transactions::Entity::find_by_id(transaction_id)
            .one(db)
            .await?
            .ok_or_else(|| LedgerError::NotFound("transaction".to_string()))?;

        let lines = akhrajat::Entity::find()
            .filter(akhrajat::Column::TransactionId.eq(transaction_id))
            .all(db)
            .await?;
        let total_expense: i64 = lines.iter().map(|line| line.amount).sum();

        let net_income = tx_model.gross_income - total_expense;
        let final_balance = net_income + tx_model.adjustment;

        let updated = transactions::ActiveModel {
            id: ActiveValue::Set(transaction_id),
            total_expense: ActiveValue::Set(total_expense),
            net_income: ActiveValue::Set(net_income),
            final_balance: ActiveValue::Set(final_balance),
            synced: ActiveValue::Set(false),
            synced_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .update(db)
        .await?;

        Ok(updated)
    }
}
