use sea_orm::{DatabaseTransaction, QueryFilter, QueryOrder, prelude::*};

use crate::{
    Akhrajat, LedgerError, ResultLedger, Transaction, Trolly, akhrajat, commands::TripRange,
    other_titles, transactions, trollies, vehicle_details,
};

use super::super::Engine;

impl Engine {
    /// Loads the trolly and akhrajat children onto a transaction row.
    pub(in crate::ops) async fn hydrate_transaction(
        &self,
        db: &DatabaseTransaction,
        model: transactions::Model,
    ) -> ResultLedger<Transaction> {
        let mut tx = Transaction::from(model);

        tx.trolly = trollies::Entity::find()
            .filter(trollies::Column::TransactionId.eq(tx.id))
            .one(db)
            .await?
            .map(Trolly::from);

        let line_models = akhrajat::Entity::find()
            .filter(akhrajat::Column::TransactionId.eq(tx.id))
            .order_by_asc(akhrajat::Column::Id)
            .all(db)
            .await?;
        let mut lines = Vec::with_capacity(line_models.len());
        for line in line_models {
            let detail = if line.is_vehicle_expense {
                vehicle_details::Entity::find()
                    .filter(vehicle_details::Column::AkhrajatId.eq(line.id))
                    .one(db)
                    .await?
            } else {
                None
            };
            let other_title = match line.other_title_id {
                Some(id) => other_titles::Entity::find_by_id(id).one(db).await?,
                None => None,
            };
            lines.push(Akhrajat::assemble(line, detail, other_title)?);
        }
        tx.akhrajat = lines;

        Ok(tx)
    }
}

/// The trip range is mandatory and must be internally consistent.
pub(super) fn validate_trip(trip: Option<TripRange>) -> ResultLedger<TripRange> {
    let trip = trip.ok_or_else(|| {
        LedgerError::Validation("trip range (start, end, count) is required".to_string())
    })?;
    if trip.end_number < trip.start_number {
        return Err(LedgerError::Validation(
            "trip end_number must be >= start_number".to_string(),
        ));
    }
    if trip.count != trip.end_number - trip.start_number + 1 {
        return Err(LedgerError::Validation(
            "trip count must equal end_number - start_number + 1".to_string(),
        ));
    }
    Ok(trip)
}
