//! Migration: Create Transactions table.

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
                CREATE TABLE "Transactions" (
                    id SERIAL PRIMARY KEY,
                    type VARCHAR(255),
                    description VARCHAR(255),
                    amount DOUBLE PRECISION,
                    currency VARCHAR(3),
                    tags TEXT[],
                    status VARCHAR(255),
                    comment VARCHAR(255),
                    link VARCHAR(255),
                    "paymentMethod" VARCHAR(255),
                    "GroupId" INTEGER REFERENCES "Groups"(id),
                    "UserId" INTEGER REFERENCES "Users"(id),
                    "CardId" INTEGER REFERENCES "Cards"(id),
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
                DROP TABLE IF EXISTS "Transactions" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
