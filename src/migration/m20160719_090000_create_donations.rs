//! Migration: Create Donations table.
//!
//! Some long-lived environments already carry this table, recorded by the
//! previous runner's ledger under the name `create-donations-table`. The
//! forward operation checks that ledger and exits early in that case.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Statement;

/// Bookkeeping table left behind by the previous migration runner.
const LEGACY_LEDGER_TABLE: &str = "migrations_history";

/// Ledger name this change was applied under before the corpus was renamed.
const LEGACY_LEDGER_NAME: &str = "create-donations-table";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // The legacy ledger only exists in environments migrated from the
        // old runner; probe for the table before querying it.
        let legacy_table = db
            .query_one_raw(Statement::from_string(
                manager.get_database_backend(),
                format!(
                    "SELECT c.relname FROM pg_class c \
                     JOIN pg_namespace n ON n.oid = c.relnamespace \
                     WHERE n.nspname = 'public' AND c.relname = '{}'",
                    LEGACY_LEDGER_TABLE
                ),
            ))
            .await?;
        if legacy_table.is_some() {
            let legacy = db
                .query_one_raw(Statement::from_string(
                    manager.get_database_backend(),
                    format!(
                        "SELECT name FROM {} WHERE name = '{}'",
                        LEGACY_LEDGER_TABLE, LEGACY_LEDGER_NAME
                    ),
                ))
                .await?;
            if legacy.is_some() {
                return Ok(());
            }
        }

        db.execute_unprepared(
            r#"
            CREATE TABLE "Donations" (
                id SERIAL PRIMARY KEY,
                amount DOUBLE PRECISION NOT NULL,
                currency VARCHAR(3) NOT NULL DEFAULT 'USD',
                title VARCHAR(255),
                "UserId" INTEGER REFERENCES "Users"(id),
                "GroupId" INTEGER REFERENCES "Groups"(id),
                "TransactionId" INTEGER REFERENCES "Transactions"(id),
                "SubscriptionId" INTEGER REFERENCES "Subscriptions"(id),
                "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                "updatedAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                "deletedAt" TIMESTAMPTZ
            );
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TABLE IF EXISTS "Donations" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
