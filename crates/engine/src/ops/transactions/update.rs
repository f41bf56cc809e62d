use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{
    LedgerError, ResultLedger, Transaction, UpdateTransactionCmd, script::ensure_working_script,
    transactions,
};

use super::super::{Engine, normalize_required_name, with_tx};

impl Engine {
    /// Updates header fields of a transaction. Only supplied fields change;
    /// geography and book changes are re-validated against the registries.
    pub async fn update_transaction(
        &self,
        cmd: UpdateTransactionCmd,
    ) -> ResultLedger<Transaction> {
        with_tx!(self, |db_tx| {
            let model = transactions::Entity::find_by_id(cmd.transaction_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("transaction".to_string()))?;

            let zone = match &cmd.zone {
                Some(zone) => {
                    let zone = normalize_required_name(zone, "zone name")?;
                    ensure_working_script("zone name", &zone)?;
                    zone
                }
                None => model.zone_name.clone(),
            };
            let sub_unit = match &cmd.sub_unit {
                Some(sub_unit) => {
                    let sub_unit = normalize_required_name(sub_unit, "sub-unit name")?;
                    ensure_working_script("sub-unit name", &sub_unit)?;
                    sub_unit
                }
                None => model.sub_unit_name.clone(),
            };
            if zone != model.zone_name || sub_unit != model.sub_unit_name {
                self.require_sub_unit(&db_tx, &zone, &sub_unit).await?;
            }

            let book_number = match &cmd.book_number {
                Some(book_number) => normalize_required_name(book_number, "book number")?,
                None => model.book_number.clone(),
            };
            // Book changes are checked against the sub-unit the transaction
            // had before this update, even when the update also moves it.
            if book_number != model.book_number {
                self.allocate_or_validate_book(&db_tx, &book_number, &model.sub_unit_name)
                    .await?;
            }

            let gross_income = cmd.gross_income.unwrap_or(model.gross_income);
            if gross_income < 0 {
                return Err(LedgerError::Validation(
                    "gross income must be >= 0".to_string(),
                ));
            }
            let adjustment = cmd.adjustment.unwrap_or(model.adjustment);
            let date = cmd.date.unwrap_or(model.date);

            transactions::ActiveModel {
                id: ActiveValue::Set(model.id),
                zone_name: ActiveValue::Set(zone),
                sub_unit_name: ActiveValue::Set(sub_unit),
                date: ActiveValue::Set(date),
                book_number: ActiveValue::Set(book_number),
                gross_income: ActiveValue::Set(gross_income),
                adjustment: ActiveValue::Set(adjustment),
                ..Default::default()
            }
            .update(&db_tx)
            .await?;

            let updated = self.recompute_totals(&db_tx, model.id).await?;
            self.hydrate_transaction(&db_tx, updated).await
        })
    }
}
