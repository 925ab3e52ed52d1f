//! Migration: Drop raw card detail columns from PaymentMethods.
//!
//! Only the processor token is stored from here on. Down restores the
//! columns' shape; their values are intentionally unrecoverable.

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
                ALTER TABLE "PaymentMethods"
                    DROP COLUMN IF EXISTS number,
                    DROP COLUMN IF EXISTS "expMonth",
                    DROP COLUMN IF EXISTS "expYear";
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
                ALTER TABLE "PaymentMethods"
                    ADD COLUMN IF NOT EXISTS number VARCHAR(19),
                    ADD COLUMN IF NOT EXISTS "expMonth" INTEGER,
                    ADD COLUMN IF NOT EXISTS "expYear" INTEGER;
                "#,
            )
            .await?;

        Ok(())
    }
}
