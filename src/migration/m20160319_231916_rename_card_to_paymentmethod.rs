//! Migration: Rename Cards to PaymentMethods.
//!
//! Payment methods belong to a user rather than a group, so the per-group
//! ownership column goes away at the same time. The down path restores the
//! GroupId column's shape but not the values it held.

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
                ALTER TABLE "Cards" RENAME TO "PaymentMethods";
                ALTER TABLE "PaymentMethods" DROP COLUMN "GroupId";

                ALTER TABLE "Transactions" RENAME COLUMN "CardId" TO "PaymentMethodId";
                ALTER TABLE "Transactions" RENAME COLUMN "paymentMethod" TO "payoutMethod";
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
                ALTER TABLE "Transactions" RENAME COLUMN "payoutMethod" TO "paymentMethod";
                ALTER TABLE "Transactions" RENAME COLUMN "PaymentMethodId" TO "CardId";

                -- Column comes back empty; prior group ownership is gone.
                ALTER TABLE "PaymentMethods" ADD COLUMN "GroupId" INTEGER REFERENCES "Groups"(id);
                ALTER TABLE "PaymentMethods" RENAME TO "Cards";
                "#,
            )
            .await?;

        Ok(())
    }
}
