//! Migration: Backfill Transactions.currency from the owning group.
//!
//! Irreversible: once backfilled, these rows cannot be told apart from rows
//! that always carried a currency, so down is a no-op.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                UPDATE "Transactions" t
                SET currency = g.currency
                FROM "Groups" g
                WHERE t."GroupId" = g.id
                  AND t.currency IS NULL;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // No way back: the pre-backfill NULLs are gone.
        Ok(())
    }
}
