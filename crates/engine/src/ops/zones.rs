//! Geography registry: zones and their sub-units.
//!
//! Names are Urdu natural keys. Renames rewrite every denormalized copy of
//! the name in the same DB transaction so referencing rows never go stale.

use chrono::Utc;
use sea_orm::{
    DatabaseTransaction, QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr,
};

use crate::{
    LedgerError, ResultLedger, SubUnit, Zone, books, script::ensure_working_script, sub_units,
    transactions, zones,
};

use super::{Engine, normalize_required_name, with_tx};

impl Engine {
    pub async fn create_zone(&self, name: &str) -> ResultLedger<Zone> {
        let name = normalize_required_name(name, "zone name")?;
        ensure_working_script("zone name", &name)?;

        with_tx!(self, |db_tx| {
            if zones::Entity::find_by_id(name.clone())
                .one(&db_tx)
                .await?
                .is_some()
            {
                return Err(LedgerError::Validation(format!(
                    "zone \"{name}\" already exists"
                )));
            }

            let zone = Zone {
                name,
                created_at: Utc::now(),
            };
            zones::ActiveModel::from(&zone).insert(&db_tx).await?;
            Ok(zone)
        })
    }

    pub async fn create_sub_unit(&self, zone: &str, name: &str) -> ResultLedger<SubUnit> {
        let name = normalize_required_name(name, "sub-unit name")?;
        ensure_working_script("sub-unit name", &name)?;

        with_tx!(self, |db_tx| {
            let zone_model = zones::Entity::find_by_id(zone.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("zone".to_string()))?;

            if sub_units::Entity::find_by_id(name.clone())
                .one(&db_tx)
                .await?
                .is_some()
            {
                return Err(LedgerError::Validation(format!(
                    "sub-unit \"{name}\" already exists"
                )));
            }

            let sub_unit = SubUnit {
                name,
                zone_name: zone_model.name,
                created_at: Utc::now(),
            };
            sub_units::ActiveModel::from(&sub_unit).insert(&db_tx).await?;
            Ok(sub_unit)
        })
    }

    /// Renames a zone and rewrites every row that carries the old name.
    pub async fn rename_zone(&self, current: &str, new_name: &str) -> ResultLedger<Zone> {
        let new_name = normalize_required_name(new_name, "zone name")?;
        ensure_working_script("zone name", &new_name)?;

        with_tx!(self, |db_tx| {
            let model = zones::Entity::find_by_id(current.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("zone".to_string()))?;
            if new_name == model.name {
                return Ok(Zone::from(model));
            }
            if zones::Entity::find_by_id(new_name.clone())
                .one(&db_tx)
                .await?
                .is_some()
            {
                return Err(LedgerError::Validation(format!(
                    "zone \"{new_name}\" already exists"
                )));
            }

            zones::Entity::update_many()
                .col_expr(zones::Column::Name, Expr::value(new_name.clone()))
                .filter(zones::Column::Name.eq(model.name.clone()))
                .exec(&db_tx)
                .await?;
            sub_units::Entity::update_many()
                .col_expr(sub_units::Column::ZoneName, Expr::value(new_name.clone()))
                .filter(sub_units::Column::ZoneName.eq(model.name.clone()))
                .exec(&db_tx)
                .await?;
            transactions::Entity::update_many()
                .col_expr(
                    transactions::Column::ZoneName,
                    Expr::value(new_name.clone()),
                )
                .filter(transactions::Column::ZoneName.eq(model.name.clone()))
                .exec(&db_tx)
                .await?;

            Ok(Zone {
                name: new_name,
                created_at: model.created_at,
            })
        })
    }

    /// Renames a sub-unit and rewrites every row that carries the old name.
    pub async fn rename_sub_unit(&self, current: &str, new_name: &str) -> ResultLedger<SubUnit> {
        let new_name = normalize_required_name(new_name, "sub-unit name")?;
        ensure_working_script("sub-unit name", &new_name)?;

        with_tx!(self, |db_tx| {
            let model = sub_units::Entity::find_by_id(current.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| LedgerError::NotFound("sub-unit".to_string()))?;
            if new_name == model.name {
                return Ok(SubUnit::from(model));
            }
            if sub_units::Entity::find_by_id(new_name.clone())
                .one(&db_tx)
                .await?
                .is_some()
            {
                return Err(LedgerError::Validation(format!(
                    "sub-unit \"{new_name}\" already exists"
                )));
            }

            sub_units::Entity::update_many()
                .col_expr(sub_units::Column::Name, Expr::value(new_name.clone()))
                .filter(sub_units::Column::Name.eq(model.name.clone()))
                .exec(&db_tx)
                .await?;
            books::Entity::update_many()
                .col_expr(books::Column::SubUnitName, Expr::value(new_name.clone()))
                .filter(books::Column::SubUnitName.eq(model.name.clone()))
                .exec(&db_tx)
                .await?;
            transactions::Entity::update_many()
                .col_expr(
                    transactions::Column::SubUnitName,
                    Expr::value(new_name.clone()),
                )
                .filter(transactions::Column::SubUnitName.eq(model.name.clone()))
                .exec(&db_tx)
                .await?;

            Ok(SubUnit {
                name: new_name,
                zone_name: model.zone_name,
                created_at: model.created_at,
            })
        })
    }

    pub async fn zones(&self) -> ResultLedger<Vec<Zone>> {
        with_tx!(self, |db_tx| {
            let models = zones::Entity::find()
                .order_by_asc(zones::Column::Name)
                .all(&db_tx)
                .await?;
            Ok(models.into_iter().map(Zone::from).collect())
        })
    }

    pub async fn sub_units(&self, zone: Option<&str>) -> ResultLedger<Vec<SubUnit>> {
        with_tx!(self, |db_tx| {
            let mut query = sub_units::Entity::find().order_by_asc(sub_units::Column::Name);
            if let Some(zone) = zone {
                query = query.filter(sub_units::Column::ZoneName.eq(zone.to_string()));
            }
            let models = query.all(&db_tx).await?;
            Ok(models.into_iter().map(SubUnit::from).collect())
        })
    }

    /// The (zone, sub-unit) pair must exist as registered.
    pub(super) async fn require_sub_unit(
        &self,
        db: &DatabaseTransaction,
        zone: &str,
        sub_unit: &str,
    ) -> ResultLedger<sub_units::Model> {
        sub_units::Entity::find_by_id(sub_unit.to_string())
            .filter(sub_units::Column::ZoneName.eq(zone.to_string()))
            .one(db)
            .await?
            .ok_or_else(|| LedgerError::NotFound("sub-unit".to_string()))
    }

    pub(super) async fn require_sub_unit_any_zone(
        &self,
        db: &DatabaseTransaction,
        sub_unit: &str,
    ) -> ResultLedger<sub_units::Model> {
        sub_units::Entity::find_by_id(sub_unit.to_string())
            .one(db)
            .await?
            .ok_or_else(|| LedgerError::NotFound("sub-unit".to_string()))
    }
}
