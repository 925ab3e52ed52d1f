//! Migration: Delete transactions whose group was soft-deleted.
//!
//! One-way cleanup; the deleted rows cannot be restored and down is a no-op.

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
                DELETE FROM "Transactions"
                WHERE "GroupId" IN (
                    SELECT id FROM "Groups" WHERE "deletedAt" IS NOT NULL
                );
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Deleted rows are gone.
        Ok(())
    }
}
