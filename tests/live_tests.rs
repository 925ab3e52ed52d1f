//! End-to-end migration properties against a live PostgreSQL database.
//!
//! Requires TEST_DATABASE_URL to point at a disposable database (the whole
//! schema is dropped and recreated). Skipped when the variable is unset.
//!
//! The scenarios share one database, so they run as a single sequential test.

use collective_migrations::migration::Migrator;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use sea_orm_migration::MigratorTrait;

async fn test_db() -> Option<DatabaseConnection> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set; skipping live migration tests");
            return None;
        }
    };
    Some(
        Database::connect(url)
            .await
            .expect("failed to connect to test database"),
    )
}

async fn table_exists(db: &DatabaseConnection, table: &str) -> bool {
    let row = db
        .query_one_raw(Statement::from_string(
            DbBackend::Postgres,
            format!(
                "SELECT table_name FROM information_schema.tables \
                 WHERE table_schema = 'public' AND table_name = '{}'",
                table
            ),
        ))
        .await
        .expect("information_schema query failed");
    row.is_some()
}

async fn column_exists(db: &DatabaseConnection, table: &str, column: &str) -> bool {
    let row = db
        .query_one_raw(Statement::from_string(
            DbBackend::Postgres,
            format!(
                "SELECT column_name FROM information_schema.columns \
                 WHERE table_schema = 'public' AND table_name = '{}' AND column_name = '{}'",
                table, column
            ),
        ))
        .await
        .expect("information_schema query failed");
    row.is_some()
}

#[tokio::test]
async fn test_corpus_lifecycle() {
    let Some(db) = test_db().await else {
        return;
    };

    // Start from nothing. A ledger reset is not an option here: the corpus
    // deliberately contains units whose down operations are broken or
    // destructive, so the only clean slate is a fresh schema.
    db.execute_unprepared("DROP SCHEMA public CASCADE; CREATE SCHEMA public;")
        .await
        .expect("failed to recreate schema");

    // Apply everything up to (not including) the Cards rename.
    Migrator::up(&db, Some(9)).await.expect("partial up failed");
    assert!(table_exists(&db, "Cards").await);
    assert!(column_exists(&db, "Cards", "GroupId").await);
    assert!(column_exists(&db, "Transactions", "paymentMethod").await);
    assert!(column_exists(&db, "Transactions", "CardId").await);

    // The rename unit swaps the table and both transaction columns.
    Migrator::up(&db, Some(1)).await.expect("rename up failed");
    assert!(!table_exists(&db, "Cards").await);
    assert!(table_exists(&db, "PaymentMethods").await);
    assert!(!column_exists(&db, "PaymentMethods", "GroupId").await);
    assert!(column_exists(&db, "Transactions", "payoutMethod").await);
    assert!(column_exists(&db, "Transactions", "PaymentMethodId").await);

    // Reverting restores the old naming (GroupId comes back empty).
    Migrator::down(&db, Some(1)).await.expect("rename down failed");
    assert!(table_exists(&db, "Cards").await);
    assert!(column_exists(&db, "Cards", "GroupId").await);
    assert!(column_exists(&db, "Transactions", "paymentMethod").await);
    assert!(column_exists(&db, "Transactions", "CardId").await);

    // Full forward run completes and produces the expected inventory.
    Migrator::up(&db, None).await.expect("full up failed");
    for table in [
        "Users",
        "Groups",
        "UserGroups",
        "Activities",
        "PaymentMethods",
        "Transactions",
        "Subscriptions",
        "Applications",
        "Expenses",
        "Donations",
        "seaql_migrations",
    ] {
        assert!(table_exists(&db, table).await, "{} should exist", table);
    }
    for table in ["Cards", "Paykeys"] {
        assert!(!table_exists(&db, table).await, "{} should be gone", table);
    }
    assert!(column_exists(&db, "Transactions", "deletedAt").await);
    assert!(!column_exists(&db, "PaymentMethods", "number").await);

    // Ledger agrees: nothing pending, whole corpus applied.
    let pending = Migrator::get_pending_migrations(&db)
        .await
        .expect("pending query failed");
    assert!(pending.is_empty());
    let applied = Migrator::get_applied_migrations(&db)
        .await
        .expect("applied query failed");
    assert_eq!(applied.len(), Migrator::migrations().len());

    // The newest unit is cleanly reversible: down then up again round-trips.
    Migrator::down(&db, Some(1)).await.expect("tail down failed");
    let applied = Migrator::get_applied_migrations(&db)
        .await
        .expect("applied query failed");
    assert_eq!(applied.len(), Migrator::migrations().len() - 1);
    Migrator::up(&db, None).await.expect("tail up failed");

    // Environments migrated from the old runner carry its ledger; the
    // donations unit must notice its legacy entry and exit early while still
    // being recorded as applied.
    db.execute_unprepared("DROP SCHEMA public CASCADE; CREATE SCHEMA public;")
        .await
        .expect("failed to recreate schema");
    db.execute_unprepared(
        "CREATE TABLE migrations_history (\
             name VARCHAR(255) PRIMARY KEY, \
             applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()\
         ); \
         INSERT INTO migrations_history (name) VALUES ('create-donations-table');",
    )
    .await
    .expect("failed to seed legacy ledger");

    Migrator::up(&db, None)
        .await
        .expect("up with legacy ledger failed");
    assert!(
        !table_exists(&db, "Donations").await,
        "Donations should be skipped when the legacy ledger records it"
    );
    assert!(table_exists(&db, "PaymentMethods").await);
    let applied = Migrator::get_applied_migrations(&db)
        .await
        .expect("applied query failed");
    assert_eq!(applied.len(), Migrator::migrations().len());
}
