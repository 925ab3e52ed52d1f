//! Migration: Add profile columns to Groups.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Groups::Table)
                    .add_column_if_not_exists(ColumnDef::new(Groups::LongDescription).text())
                    .add_column_if_not_exists(ColumnDef::new(Groups::Logo).string_len(255))
                    .add_column_if_not_exists(ColumnDef::new(Groups::Image).string_len(255))
                    .add_column_if_not_exists(ColumnDef::new(Groups::Website).string_len(255))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Groups::Table)
                    .drop_column(Groups::LongDescription)
                    .drop_column(Groups::Logo)
                    .drop_column(Groups::Image)
                    .drop_column(Groups::Website)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Groups {
    #[sea_orm(iden = "Groups")]
    Table,
    #[sea_orm(iden = "longDescription")]
    LongDescription,
    #[sea_orm(iden = "logo")]
    Logo,
    #[sea_orm(iden = "image")]
    Image,
    #[sea_orm(iden = "website")]
    Website,
}
