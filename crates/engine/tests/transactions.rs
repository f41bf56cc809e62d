use chrono::NaiveDate;
use sea_orm::{Database, DatabaseConnection};

use engine::{
    CreateTransactionCmd, DeleteMode, Engine, LedgerError, TransactionFilter,
    UpdateTransactionCmd,
};
use migration::MigratorTrait;
use uuid::Uuid;

const ZONE: &str = "ہزارہ";
const SUB_UNIT: &str = "بٹگرام";
const OTHER_SUB_UNIT: &str = "مانسہرہ";

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

fn create_cmd(book: &str) -> CreateTransactionCmd {
    CreateTransactionCmd::new(ZONE, SUB_UNIT, date(1), book, "munshi")
        .trip(500, 509, 10)
        .gross_income(12000)
}

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();

    engine.create_zone(ZONE).await.unwrap();
    engine.create_sub_unit(ZONE, SUB_UNIT).await.unwrap();
    engine.create_sub_unit(ZONE, OTHER_SUB_UNIT).await.unwrap();

    (engine, db)
}

async fn engine_with_file_db() -> (Engine, DatabaseConnection, String, std::path::PathBuf) {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();

    let path = root.join(format!("engine_{}.db", Uuid::new_v4()));
    let url = format!("sqlite:{}?mode=rwc", path.display());

    let db = Database::connect(&url).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();

    engine.create_zone(ZONE).await.unwrap();
    engine.create_sub_unit(ZONE, SUB_UNIT).await.unwrap();

    (engine, db, url, path)
}

#[tokio::test]
async fn create_assigns_first_ticket_and_seeds_totals() {
    let (engine, _db) = engine_with_db().await;

    let tx = engine.create_transaction(create_cmd("K-1")).await.unwrap();

    assert_eq!(tx.ticket_number, 1);
    assert_eq!(tx.gross_income, 12000);
    assert_eq!(tx.total_expense, 0);
    assert_eq!(tx.net_income, 12000);
    assert_eq!(tx.final_balance, 12000);
    assert!(!tx.synced);
    assert!(tx.synced_at.is_none());

    let trolly = tx.trolly.expect("trolly row");
    assert_eq!(trolly.start_number, 500);
    assert_eq!(trolly.end_number, 509);
    assert_eq!(trolly.count, 10);
}

#[tokio::test]
async fn tickets_are_gapless_within_a_book() {
    let (engine, _db) = engine_with_db().await;

    for expected in 1..=3 {
        let tx = engine.create_transaction(create_cmd("K-1")).await.unwrap();
        assert_eq!(tx.ticket_number, expected);
    }
}

#[tokio::test]
async fn book_belongs_to_one_sub_unit() {
    let (engine, _db) = engine_with_db().await;
    engine.create_transaction(create_cmd("K-1")).await.unwrap();

    let cmd = CreateTransactionCmd::new(ZONE, OTHER_SUB_UNIT, date(1), "K-1", "munshi")
        .trip(1, 10, 10)
        .gross_income(500);
    let err = engine.create_transaction(cmd).await.unwrap_err();

    assert_eq!(
        err,
        LedgerError::BookConflict {
            book: "K-1".to_string(),
            owner: SUB_UNIT.to_string(),
        }
    );
}

#[tokio::test]
async fn full_book_rejects_further_tickets() {
    let (engine, _db) = engine_with_db().await;

    for _ in 0..engine::MAX_TICKETS_PER_BOOK {
        engine.create_transaction(create_cmd("K-1")).await.unwrap();
    }

    let err = engine
        .create_transaction(create_cmd("K-1"))
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::BookFull("K-1".to_string()));

    // The preview goes quiet instead of erroring.
    let preview = engine.next_ticket_preview(SUB_UNIT).await.unwrap();
    assert_eq!(preview, None);
}

#[tokio::test]
async fn trip_range_must_be_consistent() {
    let (engine, _db) = engine_with_db().await;

    let cmd = CreateTransactionCmd::new(ZONE, SUB_UNIT, date(1), "K-1", "munshi")
        .trip(500, 509, 7)
        .gross_income(100);
    let err = engine.create_transaction(cmd).await.unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    let cmd = CreateTransactionCmd::new(ZONE, SUB_UNIT, date(1), "K-1", "munshi")
        .trip(509, 500, 10)
        .gross_income(100);
    let err = engine.create_transaction(cmd).await.unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    let cmd =
        CreateTransactionCmd::new(ZONE, SUB_UNIT, date(1), "K-1", "munshi").gross_income(100);
    let err = engine.create_transaction(cmd).await.unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
}

#[tokio::test]
async fn unknown_sub_unit_is_rejected() {
    let (engine, _db) = engine_with_db().await;

    let cmd = CreateTransactionCmd::new(ZONE, "کوئی اور", date(1), "K-1", "munshi")
        .trip(1, 10, 10)
        .gross_income(100);
    let err = engine.create_transaction(cmd).await.unwrap_err();

    assert_eq!(err, LedgerError::NotFound("sub-unit".to_string()));
}

#[tokio::test]
async fn latin_geography_names_are_rejected() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.create_zone("Hazara").await.unwrap_err();
    assert_eq!(
        err,
        LedgerError::Validation("zone name must be written in Urdu script".to_string())
    );

    let cmd = CreateTransactionCmd::new(ZONE, "Batagram", date(1), "K-1", "munshi")
        .trip(1, 10, 10)
        .gross_income(100);
    let err = engine.create_transaction(cmd).await.unwrap_err();
    assert_eq!(
        err,
        LedgerError::Validation("sub-unit name must be written in Urdu script".to_string())
    );
}

#[tokio::test]
async fn next_ticket_preview_follows_latest_book() {
    let (engine, _db) = engine_with_db().await;

    // Nothing allocated yet.
    let preview = engine.next_ticket_preview(SUB_UNIT).await.unwrap();
    assert_eq!(preview, None);

    engine.create_transaction(create_cmd("K-1")).await.unwrap();
    engine.create_transaction(create_cmd("K-1")).await.unwrap();

    let preview = engine
        .next_ticket_preview(SUB_UNIT)
        .await
        .unwrap()
        .expect("preview");
    assert_eq!(preview.book_number, "K-1");
    assert_eq!(preview.ticket_number, 3);

    let err = engine.next_ticket_preview("کوئی اور").await.unwrap_err();
    assert_eq!(err, LedgerError::NotFound("sub-unit".to_string()));
}

#[tokio::test]
async fn update_patches_only_supplied_fields() {
    let (engine, _db) = engine_with_db().await;
    let tx = engine.create_transaction(create_cmd("K-1")).await.unwrap();

    let updated = engine
        .update_transaction(
            UpdateTransactionCmd::new(tx.id)
                .gross_income(15000)
                .adjustment(-500),
        )
        .await
        .unwrap();

    assert_eq!(updated.gross_income, 15000);
    assert_eq!(updated.adjustment, -500);
    assert_eq!(updated.final_balance, 14500);
    assert_eq!(updated.date, tx.date);
    assert_eq!(updated.book_number, tx.book_number);
    assert_eq!(updated.ticket_number, tx.ticket_number);
}

#[tokio::test]
async fn update_checks_book_against_previous_sub_unit() {
    let (engine, _db) = engine_with_db().await;
    let tx = engine.create_transaction(create_cmd("K-1")).await.unwrap();

    // K-2 belongs to the other sub-unit.
    let other = CreateTransactionCmd::new(ZONE, OTHER_SUB_UNIT, date(1), "K-2", "munshi")
        .trip(1, 10, 10)
        .gross_income(100);
    engine.create_transaction(other).await.unwrap();

    // Moving the transaction to the other sub-unit and onto its book in one
    // call still fails: the book check uses the sub-unit the transaction had
    // before the update.
    let err = engine
        .update_transaction(
            UpdateTransactionCmd::new(tx.id)
                .sub_unit(OTHER_SUB_UNIT)
                .book_number("K-2"),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LedgerError::BookConflict {
            book: "K-2".to_string(),
            owner: OTHER_SUB_UNIT.to_string(),
        }
    );
}

#[tokio::test]
async fn single_delete_requires_highest_ticket() {
    let (engine, _db) = engine_with_db().await;
    let first = engine.create_transaction(create_cmd("K-1")).await.unwrap();
    let second = engine.create_transaction(create_cmd("K-1")).await.unwrap();

    let err = engine
        .delete_transaction(first.id, DeleteMode::Single, "munshi")
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    let deleted = engine
        .delete_transaction(second.id, DeleteMode::Single, "munshi")
        .await
        .unwrap();
    assert_eq!(deleted, vec![second.id]);

    let tombstones = engine.tombstones().await.unwrap();
    assert_eq!(tombstones.len(), 1);
    assert_eq!(tombstones[0].transaction_id, second.id);
    assert_eq!(tombstones[0].deleted_by, "munshi");
}

#[tokio::test]
async fn from_ticket_delete_removes_target_and_above() {
    let (engine, _db) = engine_with_db().await;
    let first = engine.create_transaction(create_cmd("K-1")).await.unwrap();
    let second = engine.create_transaction(create_cmd("K-1")).await.unwrap();
    let third = engine.create_transaction(create_cmd("K-1")).await.unwrap();

    let deleted = engine
        .delete_transaction(second.id, DeleteMode::FromTicket, "munshi")
        .await
        .unwrap();

    // Highest ticket goes first.
    assert_eq!(deleted, vec![third.id, second.id]);
    assert!(engine.transaction(first.id).await.is_ok());
    assert_eq!(
        engine.transaction(second.id).await.unwrap_err(),
        LedgerError::NotFound("transaction".to_string())
    );

    // One tombstone per removed transaction, none for the survivor.
    let tombstones = engine.tombstones().await.unwrap();
    let mut tombstone_ids: Vec<i64> = tombstones
        .iter()
        .map(|tombstone| tombstone.transaction_id)
        .collect();
    tombstone_ids.sort_unstable();
    assert_eq!(tombstone_ids, vec![second.id, third.id]);

    // The book keeps its owner and hands out the next gapless number.
    let next = engine.create_transaction(create_cmd("K-1")).await.unwrap();
    assert_eq!(next.ticket_number, 2);
}

#[tokio::test]
async fn whole_book_delete_releases_the_allocation() {
    let (engine, _db) = engine_with_db().await;
    let first = engine.create_transaction(create_cmd("K-1")).await.unwrap();
    let second = engine.create_transaction(create_cmd("K-1")).await.unwrap();

    let deleted = engine
        .delete_transaction(first.id, DeleteMode::WholeBook, "munshi")
        .await
        .unwrap();
    assert_eq!(deleted, vec![second.id, first.id]);

    // Every removed ticket left its own tombstone.
    let tombstones = engine.tombstones().await.unwrap();
    let mut tombstone_ids: Vec<i64> = tombstones
        .iter()
        .map(|tombstone| tombstone.transaction_id)
        .collect();
    tombstone_ids.sort_unstable();
    assert_eq!(tombstone_ids, vec![first.id, second.id]);

    // The freed book number can now be claimed by a different sub-unit.
    let cmd = CreateTransactionCmd::new(ZONE, OTHER_SUB_UNIT, date(2), "K-1", "munshi")
        .trip(1, 10, 10)
        .gross_income(100);
    let tx = engine.create_transaction(cmd).await.unwrap();
    assert_eq!(tx.ticket_number, 1);
    assert_eq!(tx.sub_unit_name, OTHER_SUB_UNIT);
}

#[tokio::test]
async fn acknowledged_tombstones_are_dropped() {
    let (engine, _db) = engine_with_db().await;
    let tx = engine.create_transaction(create_cmd("K-1")).await.unwrap();
    engine
        .delete_transaction(tx.id, DeleteMode::Single, "munshi")
        .await
        .unwrap();

    assert_eq!(engine.acknowledge_tombstones(&[]).await.unwrap(), 0);
    assert_eq!(engine.acknowledge_tombstones(&[tx.id]).await.unwrap(), 1);
    assert!(engine.tombstones().await.unwrap().is_empty());
}

#[tokio::test]
async fn updates_reset_the_synced_flag() {
    let (engine, _db) = engine_with_db().await;
    let tx = engine.create_transaction(create_cmd("K-1")).await.unwrap();

    assert_eq!(engine.mark_synced(&[tx.id]).await.unwrap(), 1);
    assert!(engine.pending_sync(None).await.unwrap().is_empty());
    let synced = engine.transaction(tx.id).await.unwrap();
    assert!(synced.synced);
    assert!(synced.synced_at.is_some());

    engine
        .update_transaction(UpdateTransactionCmd::new(tx.id).gross_income(9000))
        .await
        .unwrap();

    let updated = engine.transaction(tx.id).await.unwrap();
    assert!(!updated.synced);
    assert!(updated.synced_at.is_none());
    let pending = engine.pending_sync(None).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, tx.id);
}

#[tokio::test]
async fn pending_sync_rejects_a_zero_limit() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.pending_sync(Some(0)).await.unwrap_err();
    assert_eq!(
        err,
        LedgerError::Validation("limit must be > 0".to_string())
    );
}

#[tokio::test]
async fn list_filters_are_conjunctive() {
    let (engine, _db) = engine_with_db().await;
    engine.create_transaction(create_cmd("K-1")).await.unwrap();
    let other = CreateTransactionCmd::new(ZONE, OTHER_SUB_UNIT, date(5), "K-2", "munshi")
        .trip(1, 10, 10)
        .gross_income(100);
    engine.create_transaction(other).await.unwrap();

    let all = engine
        .list_transactions(&TransactionFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let filtered = engine
        .list_transactions(&TransactionFilter::default().sub_unit(SUB_UNIT))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].book_number, "K-1");

    let filtered = engine
        .list_transactions(
            &TransactionFilter::default()
                .date_from(date(4))
                .date_to(date(6)),
        )
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].book_number, "K-2");

    let err = engine
        .list_transactions(&TransactionFilter::default().date_from(date(6)).date_to(date(4)))
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
}

#[tokio::test]
async fn rename_sub_unit_rewrites_books_and_transactions() {
    let (engine, _db) = engine_with_db().await;
    let tx = engine.create_transaction(create_cmd("K-1")).await.unwrap();

    let renamed = engine.rename_sub_unit(SUB_UNIT, "شنکیاری").await.unwrap();
    assert_eq!(renamed.name, "شنکیاری");

    let tx = engine.transaction(tx.id).await.unwrap();
    assert_eq!(tx.sub_unit_name, "شنکیاری");

    // The renamed sub-unit still owns its book.
    let cmd = CreateTransactionCmd::new(ZONE, "شنکیاری", date(2), "K-1", "munshi")
        .trip(1, 10, 10)
        .gross_income(100);
    let next = engine.create_transaction(cmd).await.unwrap();
    assert_eq!(next.ticket_number, 2);
}

#[tokio::test]
async fn restart_engine_reads_same_state() {
    let (engine, db, url, path) = engine_with_file_db().await;
    let tx = engine.create_transaction(create_cmd("K-1")).await.unwrap();

    drop(engine);
    drop(db);

    let db2 = Database::connect(&url).await.unwrap();
    let engine2 = Engine::builder()
        .database(db2.clone())
        .build()
        .await
        .unwrap();

    let reread = engine2.transaction(tx.id).await.unwrap();
    assert_eq!(reread.ticket_number, 1);
    assert_eq!(reread.final_balance, 12000);
    assert!(reread.trolly.is_some());

    drop(db2);
    let _ = std::fs::remove_file(path);
}
