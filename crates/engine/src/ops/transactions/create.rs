use chrono::Utc;
use sea_orm::{TransactionTrait, prelude::*};

use crate::{
    CreateTransactionCmd, LedgerError, ResultLedger, Transaction, Trolly,
    script::ensure_working_script, transactions,
};

use super::super::{Engine, normalize_required_name, with_tx};
use super::helpers::validate_trip;

impl Engine {
    /// Creates a transaction with its trolly and expense lines as one
    /// atomic write.
    ///
    /// The book claim, the ticket number and the insert all happen inside
    /// the same DB transaction; failure anywhere rolls the whole write back.
    pub async fn create_transaction(
        &self,
        cmd: CreateTransactionCmd,
    ) -> ResultLedger<Transaction> {
        let zone = normalize_required_name(&cmd.zone, "zone name")?;
        ensure_working_script("zone name", &zone)?;
        let sub_unit = normalize_required_name(&cmd.sub_unit, "sub-unit name")?;
        ensure_working_script("sub-unit name", &sub_unit)?;
        let book_number = normalize_required_name(&cmd.book_number, "book number")?;
        let created_by = normalize_required_name(&cmd.created_by, "created_by")?;
        let trip = validate_trip(cmd.trip)?;
        if cmd.gross_income < 0 {
            return Err(LedgerError::Validation(
                "gross income must be >= 0".to_string(),
            ));
        }

        with_tx!(self, |db_tx| {
            self.require_sub_unit(&db_tx, &zone, &sub_unit).await?;

            let mut rows = Vec::with_capacity(cmd.akhrajat.len());
            for input in &cmd.akhrajat {
                rows.push(self.resolve_akhrajat(&db_tx, input, cmd.date).await?);
            }

            self.allocate_or_validate_book(&db_tx, &book_number, &sub_unit)
                .await?;
            let ticket_number = self.next_ticket(&db_tx, &book_number, &sub_unit).await?;

            let tx = Transaction {
                id: 0,
                zone_name: zone.clone(),
                sub_unit_name: sub_unit.clone(),
                date: cmd.date,
                book_number: book_number.clone(),
                ticket_number,
                gross_income: cmd.gross_income,
                total_expense: 0,
                net_income: cmd.gross_income,
                adjustment: cmd.adjustment,
                final_balance: cmd.gross_income + cmd.adjustment,
                created_by: created_by.clone(),
                synced: false,
                synced_at: None,
                created_at: Utc::now(),
                trolly: None,
                akhrajat: Vec::new(),
            };
            let inserted = transactions::ActiveModel::from(&tx).insert(&db_tx).await?;

            Trolly {
                start_number: trip.start_number,
                end_number: trip.end_number,
                count: trip.count,
            }
            .into_active_model(inserted.id)
            .insert(&db_tx)
            .await?;

            self.insert_akhrajat_rows(&db_tx, inserted.id, &rows).await?;
            let updated = self.recompute_totals(&db_tx, inserted.id).await?;
            self.hydrate_transaction(&db_tx, updated).await
        })
    }
}
