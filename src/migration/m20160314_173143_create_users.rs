//! Migration: Create Users table.

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
                CREATE TABLE "Users" (
                    id SERIAL PRIMARY KEY,
                    "firstName" VARCHAR(128),
                    "lastName" VARCHAR(128),
                    email VARCHAR(255) NOT NULL UNIQUE,
                    "passwordHash" VARCHAR(255),
                    "avatar" VARCHAR(255),
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
                DROP TABLE IF EXISTS "Users" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
