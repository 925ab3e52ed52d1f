//! Migration: Remove disabled API applications.

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
                DELETE FROM "Applications" WHERE disabled = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // FIXME: `DELETE *` is not valid SQL, so this down has never been
        // runnable; it fails with a syntax error if invoked. Preserved as-is
        // to keep ledger history honest.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DELETE * FROM "Applications" WHERE disabled = true;
                "#,
            )
            .await?;

        Ok(())
    }
}
