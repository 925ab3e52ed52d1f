//! Migration: Index Activities by group and creation time.
//!
//! A concurrent build would avoid blocking writes to this hot table, but the
//! runner executes each batch inside a single transaction, where
//! CREATE INDEX CONCURRENTLY is rejected. The index builds plainly and
//! briefly blocks writes to Activities while it does.

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
                CREATE INDEX IF NOT EXISTS "activities_group_id_created_at"
                    ON "Activities"("GroupId", "createdAt");
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
                DROP INDEX IF EXISTS "activities_group_id_created_at";
                "#,
            )
            .await?;

        Ok(())
    }
}
