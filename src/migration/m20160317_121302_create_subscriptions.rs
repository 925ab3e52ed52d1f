//! Migration: Create Subscriptions table.

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
                CREATE TABLE "Subscriptions" (
                    id SERIAL PRIMARY KEY,
                    amount DOUBLE PRECISION NOT NULL,
                    currency VARCHAR(3) NOT NULL DEFAULT 'USD',
                    "interval" VARCHAR(8) NOT NULL
                        CHECK ("interval" IN ('week', 'month', 'year')),
                    "isActive" BOOLEAN NOT NULL DEFAULT true,
                    "stripeSubscriptionId" VARCHAR(255),
                    "activatedAt" TIMESTAMPTZ,
                    "deactivatedAt" TIMESTAMPTZ,
                    "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    "updatedAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
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
                DROP TABLE IF EXISTS "Subscriptions" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
