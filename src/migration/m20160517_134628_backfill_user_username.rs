//! Migration: Add Users.username, seeded from the email local part.

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
                ALTER TABLE "Users" ADD COLUMN IF NOT EXISTS username VARCHAR(255);

                UPDATE "Users"
                SET username = split_part(email, '@', 1)
                WHERE username IS NULL;
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
                ALTER TABLE "Users" DROP COLUMN IF EXISTS username;
                "#,
            )
            .await?;

        Ok(())
    }
}
