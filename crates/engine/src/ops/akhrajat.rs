//! Expense resolution and the standalone akhrajat operations.
//!
//! Every expense payload, whether part of a transaction create or a
//! standalone edit, passes through [`Engine::resolve_akhrajat`] before it
//! touches the database.

use sea_orm::{ActiveValue, DatabaseTransaction, QueryFilter, TransactionTrait, prelude::*};

use chrono::NaiveDate;

use crate::{
    Akhrajat, AkhrajatInput, AkhrajatTitle, LedgerError, ResultLedger, VehicleDetail,
    VehicleDetailInput, VehicleExpenseType, akhrajat, akhrajat::AkhrajatRow, other_titles,
    script::ensure_working_script, transactions, vehicle_details,
};

use super::{Engine, normalize_optional_text, with_tx};

impl Engine {
    /// Validates and normalizes one expense payload into column values.
    ///
    /// Classification is derived here: vehicle from the title, other from
    /// the explicit flag, an other-title reference, or the miscellaneous
    /// title itself. The two never overlap.
    pub(super) async fn resolve_akhrajat(
        &self,
        db: &DatabaseTransaction,
        input: &AkhrajatInput,
        default_date: NaiveDate,
    ) -> ResultLedger<AkhrajatRow> {
        let title = AkhrajatTitle::try_from(input.title.trim())?;

        // Amounts are signed; negative lines are corrections.
        if input.amount == 0 {
            return Err(LedgerError::Validation(
                "akhrajat amount must not be zero".to_string(),
            ));
        }

        let is_vehicle = title.is_vehicle();
        let other_requested =
            input.is_other || input.other_title_id.is_some() || input.other_title.is_some();
        if is_vehicle && other_requested {
            return Err(LedgerError::Validation(
                "a vehicle expense cannot carry the other classification".to_string(),
            ));
        }
        let is_other = other_requested || title.is_mutafarik();

        if input.vehicle_detail.is_some() && !is_vehicle {
            return Err(LedgerError::Validation(
                "vehicle detail is only valid on a gari expense".to_string(),
            ));
        }

        let description = normalize_optional_text(input.description.as_deref());
        if !is_other {
            if let Some(text) = &description {
                ensure_working_script("akhrajat description", text)?;
            }
        }

        let detail = input
            .vehicle_detail
            .as_ref()
            .map(resolve_vehicle_detail)
            .transpose()?;

        let other_title_id = if is_other {
            Some(self.resolve_other_title(db, input).await?)
        } else {
            None
        };

        Ok(AkhrajatRow {
            title,
            description,
            amount: input.amount,
            date: input.date.unwrap_or(default_date),
            is_vehicle_expense: is_vehicle,
            is_other_expense: is_other,
            other_title_id,
            detail,
        })
    }

    /// Resolves the other-expense sub-title: id first, then label, then the
    /// description text. Labels are get-or-create by exact name.
    async fn resolve_other_title(
        &self,
        db: &DatabaseTransaction,
        input: &AkhrajatInput,
    ) -> ResultLedger<i64> {
        if let Some(id) = input.other_title_id {
            other_titles::Entity::find_by_id(id)
                .one(db)
                .await?
                .ok_or(LedgerError::UnknownOtherTitle(id))?;
            return Ok(id);
        }

        let name = normalize_optional_text(input.other_title.as_deref())
            .or_else(|| normalize_optional_text(input.description.as_deref()))
            .ok_or(LedgerError::MissingOtherSubtitle)?;

        if let Some(existing) = other_titles::Entity::find()
            .filter(other_titles::Column::Name.eq(name.clone()))
            .one(db)
            .await?
        {
            return Ok(existing.id);
        }

        let inserted = crate::OtherTitle::insert_model(name).insert(db).await?;
        Ok(inserted.id)
    }

    /// Inserts resolved lines (plus detail sub-rows) for a transaction.
    pub(super) async fn insert_akhrajat_rows(
        &self,
        db: &DatabaseTransaction,
        transaction_id: i64,
        rows: &[AkhrajatRow],
    ) -> ResultLedger<()> {
        for row in rows {
            let inserted = row.active_model(transaction_id).insert(db).await?;
            if let Some(detail) = row.detail.clone() {
                detail.into_active_model(inserted.id).insert(db).await?;
            }
        }
        Ok(())
    }

    pub(super) async fn load_akhrajat(
        &self,
        db: &DatabaseTransaction,
        akhrajat_id: i64,
    ) -> ResultLedger<Akhrajat> {
        let model = akhrajat::Entity::find_by_id(akhrajat_id)
            .one(db)
            .await?
            .ok_or_else(|| LedgerError::NotFound("akhrajat".to_string()))?;
        let detail = vehicle_details::Entity::find()
            .filter(vehicle_details::Column::AkhrajatId.eq(model.id))
            .one(db)
            .await?;
        let other_title = match model.other_title_id {
            Some(id) => other_titles::Entity::find_by_id(id).one(db).await?,
            None => None,
        };
        Akhrajat::assemble(model, detail, other_title)
    }

    /// Adds one expense line to an existing transaction.
    pub async fn add_akhrajat(
        &self,
        transaction_id: i64,
        input: AkhrajatInput,
    ) -> ResultLedger<Akhrajat> {
        with_tx!(self, |db_tx| {
            let tx_model = transactions::Entity::find_by_id(transaction_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("transaction".to_string()))?;

            let row = self.resolve_akhrajat(&db_tx, &input, tx_model.date).await?;
            let inserted = row.active_model(tx_model.id).insert(&db_tx).await?;
            if let Some(detail) = row.detail.clone() {
                detail.into_active_model(inserted.id).insert(&db_tx).await?;
            }

            self.recompute_totals(&db_tx, tx_model.id).await?;
            self.load_akhrajat(&db_tx, inserted.id).await
        })
    }

    /// Replaces an expense line with a freshly resolved payload. The detail
    /// sub-row is dropped and re-created, never patched in place.
    pub async fn update_akhrajat(
        &self,
        akhrajat_id: i64,
        input: AkhrajatInput,
    ) -> ResultLedger<Akhrajat> {
        with_tx!(self, |db_tx| {
            let model = akhrajat::Entity::find_by_id(akhrajat_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("akhrajat".to_string()))?;
            let tx_model = transactions::Entity::find_by_id(model.transaction_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("transaction".to_string()))?;

            let row = self.resolve_akhrajat(&db_tx, &input, tx_model.date).await?;

            akhrajat::ActiveModel {
                id: ActiveValue::Set(model.id),
                title: ActiveValue::Set(row.title.as_str().to_string()),
                description: ActiveValue::Set(row.description.clone()),
                amount: ActiveValue::Set(row.amount),
                date: ActiveValue::Set(row.date),
                is_vehicle_expense: ActiveValue::Set(row.is_vehicle_expense),
                is_other_expense: ActiveValue::Set(row.is_other_expense),
                other_title_id: ActiveValue::Set(row.other_title_id),
                ..Default::default()
            }
            .update(&db_tx)
            .await?;

            vehicle_details::Entity::delete_many()
                .filter(vehicle_details::Column::AkhrajatId.eq(model.id))
                .exec(&db_tx)
                .await?;
            if let Some(detail) = row.detail.clone() {
                detail.into_active_model(model.id).insert(&db_tx).await?;
            }

            self.recompute_totals(&db_tx, model.transaction_id).await?;
            self.load_akhrajat(&db_tx, model.id).await
        })
    }

    /// Removes one expense line and its detail sub-row.
    pub async fn remove_akhrajat(&self, akhrajat_id: i64) -> ResultLedger<()> {
        with_tx!(self, |db_tx| {
            let model = akhrajat::Entity::find_by_id(akhrajat_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("akhrajat".to_string()))?;

            vehicle_details::Entity::delete_many()
                .filter(vehicle_details::Column::AkhrajatId.eq(model.id))
                .exec(&db_tx)
                .await?;
            akhrajat::Entity::delete_by_id(model.id).exec(&db_tx).await?;

            self.recompute_totals(&db_tx, model.transaction_id).await?;
            Ok(())
        })
    }
}

fn resolve_vehicle_detail(input: &VehicleDetailInput) -> ResultLedger<VehicleDetail> {
    let expense_type = VehicleExpenseType::try_from(input.expense_type.trim())?;

    if expense_type.requires_quantity() && !input.quantity.is_some_and(|q| q > 0) {
        return Err(LedgerError::IncompleteVehicleDetail(format!(
            "{} requires quantity > 0",
            expense_type.as_str()
        )));
    }

    let part = normalize_optional_text(input.part.as_deref());
    if expense_type.requires_part() && part.is_none() {
        return Err(LedgerError::IncompleteVehicleDetail(
            "repair requires the serviced part".to_string(),
        ));
    }

    Ok(VehicleDetail {
        expense_type,
        quantity: input.quantity,
        part,
    })
}
