//! Migration: Replace the Users.email unique constraint with a partial index.
//!
//! Soft-deleted accounts keep their email; only live rows must be unique.

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
                ALTER TABLE "Users" DROP CONSTRAINT "Users_email_key";

                CREATE UNIQUE INDEX "users_email_unique"
                    ON "Users"(email)
                    WHERE "deletedAt" IS NULL;
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
                DROP INDEX IF EXISTS "users_email_unique";

                ALTER TABLE "Users" ADD CONSTRAINT "Users_email_key" UNIQUE (email);
                "#,
            )
            .await?;

        Ok(())
    }
}
