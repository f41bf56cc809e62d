//! Initial schema migration - creates all tables from scratch.
//!
//! Consolidated schema for Mahsool:
//!
//! - `zones`: top-level collection areas (Urdu name is the key)
//! - `sub_units`: collection points ("khda") inside a zone
//! - `books`: physical ticket-book allocations, one owner for life
//! - `other_titles`: shared free-form "other" expense sub-titles
//! - `transactions`: one ticket's daily income with denormalized totals
//! - `trollies`: the trip range each ticket covers
//! - `akhrajat`: expense lines under a transaction
//! - `vehicle_details`: at most one detail sub-row per vehicle expense
//! - `deleted_transactions`: tombstones for the sync exporter

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Zones {
    Table,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum SubUnits {
    Table,
    Name,
    ZoneName,
    CreatedAt,
}

#[derive(Iden)]
enum Books {
    Table,
    BookNumber,
    SubUnitName,
    CreatedAt,
}

#[derive(Iden)]
enum OtherTitles {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    ZoneName,
    SubUnitName,
    Date,
    BookNumber,
    TicketNumber,
    GrossIncome,
    TotalExpense,
    NetIncome,
    Adjustment,
    FinalBalance,
    CreatedBy,
    Synced,
    SyncedAt,
    CreatedAt,
}

#[derive(Iden)]
enum Trollies {
    Table,
    Id,
    TransactionId,
    StartNumber,
    EndNumber,
    Count,
}

#[derive(Iden)]
enum Akhrajat {
    Table,
    Id,
    TransactionId,
    Title,
    Description,
    Amount,
    Date,
    IsVehicleExpense,
    IsOtherExpense,
    OtherTitleId,
}

#[derive(Iden)]
enum VehicleDetails {
    Table,
    Id,
    AkhrajatId,
    ExpenseType,
    Quantity,
    Part,
}

#[derive(Iden)]
enum DeletedTransactions {
    Table,
    TransactionId,
    DeletedAt,
    DeletedBy,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Zones
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Zones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Zones::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Zones::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Sub-units
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(SubUnits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubUnits::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SubUnits::ZoneName).string().not_null())
                    .col(ColumnDef::new(SubUnits::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sub_units-zone_name")
                            .from(SubUnits::Table, SubUnits::ZoneName)
                            .to(Zones::Table, Zones::Name)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-sub_units-zone_name")
                    .table(SubUnits::Table)
                    .col(SubUnits::ZoneName)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Books
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Books::BookNumber)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Books::SubUnitName).string().not_null())
                    .col(ColumnDef::new(Books::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-books-sub_unit_name")
                            .from(Books::Table, Books::SubUnitName)
                            .to(SubUnits::Table, SubUnits::Name)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-books-sub_unit_name")
                    .table(Books::Table)
                    .col(Books::SubUnitName)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Other-expense titles
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(OtherTitles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OtherTitles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OtherTitles::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-other_titles-name-unique")
                    .table(OtherTitles::Table)
                    .col(OtherTitles::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Transactions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::ZoneName).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::SubUnitName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Date).date().not_null())
                    .col(ColumnDef::new(Transactions::BookNumber).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::TicketNumber)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::GrossIncome)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::TotalExpense)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::NetIncome)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Adjustment)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::FinalBalance)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Transactions::Synced).boolean().not_null())
                    .col(ColumnDef::new(Transactions::SyncedAt).timestamp())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-zone_name")
                            .from(Transactions::Table, Transactions::ZoneName)
                            .to(Zones::Table, Zones::Name)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-sub_unit_name")
                            .from(Transactions::Table, Transactions::SubUnitName)
                            .to(SubUnits::Table, SubUnits::Name)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-book-ticket-unique")
                    .table(Transactions::Table)
                    .col(Transactions::BookNumber)
                    .col(Transactions::TicketNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-sub_unit_name")
                    .table(Transactions::Table)
                    .col(Transactions::SubUnitName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-synced")
                    .table(Transactions::Table)
                    .col(Transactions::Synced)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 6. Trollies
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Trollies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trollies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Trollies::TransactionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trollies::StartNumber)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Trollies::EndNumber).big_integer().not_null())
                    .col(ColumnDef::new(Trollies::Count).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-trollies-transaction_id")
                            .from(Trollies::Table, Trollies::TransactionId)
                            .to(Transactions::Table, Transactions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-trollies-transaction_id")
                    .table(Trollies::Table)
                    .col(Trollies::TransactionId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 7. Akhrajat
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Akhrajat::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Akhrajat::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Akhrajat::TransactionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Akhrajat::Title).string().not_null())
                    .col(ColumnDef::new(Akhrajat::Description).string())
                    .col(ColumnDef::new(Akhrajat::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Akhrajat::Date).date().not_null())
                    .col(
                        ColumnDef::new(Akhrajat::IsVehicleExpense)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Akhrajat::IsOtherExpense)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Akhrajat::OtherTitleId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-akhrajat-transaction_id")
                            .from(Akhrajat::Table, Akhrajat::TransactionId)
                            .to(Transactions::Table, Transactions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-akhrajat-other_title_id")
                            .from(Akhrajat::Table, Akhrajat::OtherTitleId)
                            .to(OtherTitles::Table, OtherTitles::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-akhrajat-transaction_id")
                    .table(Akhrajat::Table)
                    .col(Akhrajat::TransactionId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 8. Vehicle details
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(VehicleDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VehicleDetails::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VehicleDetails::AkhrajatId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehicleDetails::ExpenseType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VehicleDetails::Quantity).big_integer())
                    .col(ColumnDef::new(VehicleDetails::Part).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-vehicle_details-akhrajat_id")
                            .from(VehicleDetails::Table, VehicleDetails::AkhrajatId)
                            .to(Akhrajat::Table, Akhrajat::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-vehicle_details-akhrajat_id-unique")
                    .table(VehicleDetails::Table)
                    .col(VehicleDetails::AkhrajatId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 9. Deletion tombstones
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(DeletedTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeletedTransactions::TransactionId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeletedTransactions::DeletedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeletedTransactions::DeletedBy)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-deleted_transactions-deleted_at")
                    .table(DeletedTransactions::Table)
                    .col(DeletedTransactions::DeletedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeletedTransactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VehicleDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Akhrajat::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Trollies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OtherTitles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubUnits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Zones::Table).to_owned())
            .await?;

        Ok(())
    }
}
