//! Migration: Create Expenses table.

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
                CREATE TABLE "Expenses" (
                    id SERIAL PRIMARY KEY,
                    title VARCHAR(255),
                    amount DOUBLE PRECISION NOT NULL,
                    currency VARCHAR(3) NOT NULL DEFAULT 'USD',
                    status VARCHAR(20) NOT NULL DEFAULT 'PENDING'
                        CHECK (status IN ('PENDING', 'APPROVED', 'REJECTED', 'PAID')),
                    "payoutMethod" VARCHAR(255),
                    "UserId" INTEGER NOT NULL REFERENCES "Users"(id),
                    "GroupId" INTEGER NOT NULL REFERENCES "Groups"(id),
                    "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    "updatedAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    "deletedAt" TIMESTAMPTZ
                );

                CREATE INDEX "expenses_group_id" ON "Expenses"("GroupId");
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
                DROP TABLE IF EXISTS "Expenses" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
