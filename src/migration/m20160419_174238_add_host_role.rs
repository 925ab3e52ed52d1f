//! Migration: Add HOST to the UserGroups role enum.
//!
//! Rebuilds the enum type instead of `ALTER TYPE ... ADD VALUE`: Postgres
//! rejects ADD VALUE inside the transaction that created the type, which
//! would break a scratch run applying the whole corpus in one batch. The
//! rebuild works anywhere. Irreversible either way: down is a documented
//! no-op, since removing the value would mean rewriting every row using it.

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
                ALTER TYPE "enum_UserGroups_role" RENAME TO "enum_UserGroups_role_old";

                CREATE TYPE "enum_UserGroups_role" AS ENUM ('MEMBER', 'ADMIN', 'BACKER', 'HOST');

                ALTER TABLE "UserGroups"
                    ALTER COLUMN role DROP DEFAULT,
                    ALTER COLUMN role TYPE "enum_UserGroups_role"
                        USING role::text::"enum_UserGroups_role",
                    ALTER COLUMN role SET DEFAULT 'MEMBER';

                DROP TYPE "enum_UserGroups_role_old";
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Removing an enum value would require rewriting the type and every
        // row using it; not supported.
        Ok(())
    }
}
