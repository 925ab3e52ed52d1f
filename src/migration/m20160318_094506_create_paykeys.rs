//! Migration: Create Paykeys table.
//!
//! PayPal preapproval keys; one row per pending payout authorization.

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
                CREATE TABLE "Paykeys" (
                    id SERIAL PRIMARY KEY,
                    paykey VARCHAR(255) NOT NULL UNIQUE,
                    status VARCHAR(255),
                    payload JSONB,
                    error JSONB,
                    "TransactionId" INTEGER REFERENCES "Transactions"(id),
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
                DROP TABLE IF EXISTS "Paykeys" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
