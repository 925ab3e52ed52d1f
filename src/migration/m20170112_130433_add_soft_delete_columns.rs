//! Migration: Soft-delete columns for Transactions and Subscriptions.

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
                ALTER TABLE "Transactions" ADD COLUMN IF NOT EXISTS "deletedAt" TIMESTAMPTZ;
                ALTER TABLE "Subscriptions" ADD COLUMN IF NOT EXISTS "deletedAt" TIMESTAMPTZ;

                -- Live-row lookups only ever filter on NULL
                CREATE INDEX IF NOT EXISTS "transactions_deleted_at"
                    ON "Transactions"("deletedAt")
                    WHERE "deletedAt" IS NULL;
                CREATE INDEX IF NOT EXISTS "subscriptions_deleted_at"
                    ON "Subscriptions"("deletedAt")
                    WHERE "deletedAt" IS NULL;
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
                DROP INDEX IF EXISTS "transactions_deleted_at";
                DROP INDEX IF EXISTS "subscriptions_deleted_at";

                ALTER TABLE "Transactions" DROP COLUMN IF EXISTS "deletedAt";
                ALTER TABLE "Subscriptions" DROP COLUMN IF EXISTS "deletedAt";
                "#,
            )
            .await?;

        Ok(())
    }
}
