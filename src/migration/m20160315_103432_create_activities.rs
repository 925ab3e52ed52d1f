//! Migration: Create Activities table.
//!
//! Append-only event log; rows carry a free-form JSONB payload.

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
                CREATE TABLE "Activities" (
                    id SERIAL PRIMARY KEY,
                    type VARCHAR(255) NOT NULL,
                    data JSONB,
                    "GroupId" INTEGER REFERENCES "Groups"(id),
                    "UserId" INTEGER REFERENCES "Users"(id),
                    "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
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
                DROP TABLE IF EXISTS "Activities" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
