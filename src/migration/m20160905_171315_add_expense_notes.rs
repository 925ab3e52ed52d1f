//! Migration: Add notes column to Expenses.

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
                ALTER TABLE "Expenses" ADD COLUMN notes TEXT;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // FIXME: this targets "Donations" rather than "Expenses", so the
        // column added above survives a rollback. Preserved as-is because the
        // unit is already applied everywhere; a correcting unit would have to
        // carry a new ledger name.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE "Donations" DROP COLUMN IF EXISTS notes;
                "#,
            )
            .await?;

        Ok(())
    }
}
