//! Migration: Create UserGroups join table and its role enum.

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
                CREATE TYPE "enum_UserGroups_role" AS ENUM ('MEMBER', 'ADMIN', 'BACKER');

                CREATE TABLE "UserGroups" (
                    id SERIAL PRIMARY KEY,
                    role "enum_UserGroups_role" NOT NULL DEFAULT 'MEMBER',
                    "UserId" INTEGER NOT NULL REFERENCES "Users"(id) ON DELETE CASCADE,
                    "GroupId" INTEGER NOT NULL REFERENCES "Groups"(id) ON DELETE CASCADE,
                    "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    "updatedAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    UNIQUE ("UserId", "GroupId")
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
                DROP TABLE IF EXISTS "UserGroups" CASCADE;
                DROP TYPE IF EXISTS "enum_UserGroups_role";
                "#,
            )
            .await?;

        Ok(())
    }
}
