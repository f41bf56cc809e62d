use sea_orm::{QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*};

use crate::{LedgerError, ResultLedger, Transaction, TransactionFilter, transactions};

use super::super::{Engine, with_tx};

const DEFAULT_LIST_LIMIT: u64 = 100;
const MAX_LIST_LIMIT: u64 = 500;

fn validate_list_filter(filter: &TransactionFilter) -> ResultLedger<u64> {
    if let (Some(from), Some(to)) = (filter.date_from, filter.date_to) {
        if from > to {
            return Err(LedgerError::Validation(
                "date_from must be <= date_to".to_string(),
            ));
        }
    }
    match filter.limit {
        Some(0) => Err(LedgerError::Validation("limit must be > 0".to_string())),
        Some(limit) => Ok(limit.min(MAX_LIST_LIMIT)),
        None => Ok(DEFAULT_LIST_LIMIT),
    }
}

impl Engine {
    /// Returns one transaction with its trolly and expense lines.
    pub async fn transaction(&self, transaction_id: i64) -> ResultLedger<Transaction> {
        with_tx!(self, |db_tx| {
            let model = transactions::Entity::find_by_id(transaction_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("transaction".to_string()))?;
            self.hydrate_transaction(&db_tx, model).await
        })
    }

    /// Lists hydrated transactions matching the filter, ordered by book then
    /// ticket number.
    pub async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> ResultLedger<Vec<Transaction>> {
        let limit = validate_list_filter(filter)?;

        with_tx!(self, |db_tx| {
            let mut query = transactions::Entity::find();
            if let Some(zone) = &filter.zone {
                query = query.filter(transactions::Column::ZoneName.eq(zone.clone()));
            }
            if let Some(sub_unit) = &filter.sub_unit {
                query = query.filter(transactions::Column::SubUnitName.eq(sub_unit.clone()));
            }
            if let Some(book_number) = &filter.book_number {
                query = query.filter(transactions::Column::BookNumber.eq(book_number.clone()));
            }
            if let Some(date_from) = filter.date_from {
                query = query.filter(transactions::Column::Date.gte(date_from));
            }
            if let Some(date_to) = filter.date_to {
                query = query.filter(transactions::Column::Date.lte(date_to));
            }

            let models = query
                .order_by_asc(transactions::Column::BookNumber)
                .order_by_asc(transactions::Column::TicketNumber)
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
}
