//! Migration: Add mission statement column to Groups.

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
                ALTER TABLE "Groups" ADD COLUMN mission VARCHAR(100);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // FIXME: this re-adds the column instead of dropping it; rollback
        // leaves the schema unchanged. Preserved as-is since the unit is
        // already applied everywhere.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE "Groups" ADD COLUMN IF NOT EXISTS mission VARCHAR(100);
                "#,
            )
            .await?;

        Ok(())
    }
}
