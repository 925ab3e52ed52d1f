//! Migration: Create Groups table.
//!
//! Groups are the collectives that collect and spend money; every financial
//! row in the schema hangs off a group directly or indirectly.

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
                CREATE TABLE "Groups" (
                    id SERIAL PRIMARY KEY,
                    name VARCHAR(128) NOT NULL,
                    slug VARCHAR(255) NOT NULL UNIQUE,
                    description VARCHAR(255),
                    budget DOUBLE PRECISION,
                    currency VARCHAR(3) NOT NULL DEFAULT 'USD',
                    "isPublic" BOOLEAN NOT NULL DEFAULT false,
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
                DROP TABLE IF EXISTS "Groups" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
