//! Migration: Create Applications table.

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
                CREATE TABLE "Applications" (
                    id SERIAL PRIMARY KEY,
                    api_key VARCHAR(255) NOT NULL UNIQUE,
                    name VARCHAR(255),
                    href VARCHAR(255),
                    disabled BOOLEAN NOT NULL DEFAULT false,
                    "UserId" INTEGER REFERENCES "Users"(id),
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
                DROP TABLE IF EXISTS "Applications" CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
