//! Migration: Create Cards table.
//!
//! Later renamed to PaymentMethods; card rows belong to both a user and the
//! group that charged them at this point in the schema's history.

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
                CREATE TABLE "Cards" (
                    id SERIAL PRIMARY KEY,
                    number VARCHAR(19),
                    token VARCHAR(255),
                    service VARCHAR(255) NOT NULL DEFAULT 'stripe',
                    "serviceId" VARCHAR(255),
                    "expMonth" INTEGER,
                    "expYear" INTEGER,
                    "UserId" INTEGER REFERENCES "Users"(id),
                    "GroupId" INTEGER REFERENCES "Groups"(id),
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
                DROP TABLE IF EXISTS "Cards" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
