//! Sync reconciliation surface for the cloud exporter.
//!
//! The engine never uploads anything itself; it exposes what changed
//! (pending transactions, tombstones) and records what the exporter has
//! confirmed (mark-synced, acknowledgements).

use chrono::Utc;
use sea_orm::{
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*, sea_query::Expr,
};

use crate::{LedgerError, ResultLedger, Tombstone, Transaction, tombstones, transactions};

use super::{Engine, with_tx};

const DEFAULT_PENDING_LIMIT: u64 = 100;

impl Engine {
    /// All unacknowledged deletion tombstones, oldest first.
    pub async fn tombstones(&self) -> ResultLedger<Vec<Tombstone>> {
        with_tx!(self, |db_tx| {
            let models = tombstones::Entity::find()
                .order_by_asc(tombstones::Column::DeletedAt)
                .order_by_asc(tombstones::Column::TransactionId)
                .all(&db_tx)
                .await?;
            Ok(models.into_iter().map(Tombstone::from).collect())
        })
    }

    /// Drops tombstones the exporter has propagated. Returns how many rows
    /// were removed; unknown ids are ignored.
    pub async fn acknowledge_tombstones(&self, ids: &[i64]) -> ResultLedger<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        with_tx!(self, |db_tx| {
            let result = tombstones::Entity::delete_many()
                .filter(tombstones::Column::TransactionId.is_in(ids.to_vec()))
                .exec(&db_tx)
                .await?;
            Ok(result.rows_affected)
        })
    }

    /// Hydrated transactions not yet exported, oldest first.
    pub async fn pending_sync(&self, limit: Option<u64>) -> ResultLedger<Vec<Transaction>> {
        let limit = match limit {
            Some(0) => {
                return Err(LedgerError::Validation("limit must be > 0".to_string()));
            }
            Some(limit) => limit,
            None => DEFAULT_PENDING_LIMIT,
        };
        with_tx!(self, |db_tx| {
            let models = transactions::Entity::find()
                .filter(transactions::Column::Synced.eq(false))
                .order_by_asc(transactions::Column::CreatedAt)
                .order_by_asc(transactions::Column::Id)
                .limit(limit)
                .all(&db_tx)
                .await?;
            let mut out = Vec::with_capacity(models.len());
            for model in models {
                out.push(self.hydrate_transaction(&db_tx, model).await?);
            }
            Ok(out)
        })
    }

    /// Flags transactions as exported. Returns how many rows changed.
    pub async fn mark_synced(&self, ids: &[i64]) -> ResultLedger<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        with_tx!(self, |db_tx| {
            let result = transactions::Entity::update_many()
                .col_expr(transactions::Column::Synced, Expr::value(true))
                .col_expr(transactions::Column::SyncedAt, Expr::value(Utc::now()))
                .filter(transactions::Column::Id.is_in(ids.to_vec()))
                .exec(&db_tx)
                .await?;
            Ok(result.rows_affected)
        })
    }
}
