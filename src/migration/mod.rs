//! SeaORM database migrations.
//!
//! Units are named `mYYYYMMDD_HHMMSS_description`, so their ledger identity
//! (derived by `DeriveMigrationName` from the module name) sorts in the order
//! they were authored. The runner applies them strictly in that order and
//! records each applied unit in the `seaql_migrations` ledger table.

pub use sea_orm_migration::prelude::*;

pub mod reversibility;

mod m20160314_173143_create_users;
mod m20160314_173144_create_groups;
mod m20160314_190554_create_user_groups;
mod m20160315_103432_create_activities;
mod m20160315_154654_create_cards;
mod m20160316_132359_create_transactions;
mod m20160317_121302_create_subscriptions;
mod m20160318_094506_create_paykeys;
mod m20160318_170423_add_transactions_group_index;
mod m20160319_231916_rename_card_to_paymentmethod;
mod m20160324_220433_add_group_profile_columns;
mod m20160330_121745_add_tags_to_groups;
mod m20160401_093912_backfill_transaction_currency;
mod m20160408_165417_create_applications;
mod m20160412_184730_add_users_email_unique_index;
mod m20160419_174238_add_host_role;
mod m20160502_103451_drop_paykeys;
mod m20160517_134628_backfill_user_username;
mod m20160609_112536_create_expenses;
mod m20160623_174552_add_activities_group_index;
mod m20160719_090000_create_donations;
mod m20160801_153104_delete_orphan_transactions;
mod m20160905_171315_add_expense_notes;
mod m20161004_103245_add_mission_to_groups;
mod m20161102_134547_prune_disabled_applications;
mod m20170112_130433_add_soft_delete_columns;
mod m20170203_142503_drop_card_number_columns;
mod m20170314_092144_add_subscriptions_active_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20160314_173143_create_users::Migration),
            Box::new(m20160314_173144_create_groups::Migration),
            Box::new(m20160314_190554_create_user_groups::Migration),
            Box::new(m20160315_103432_create_activities::Migration),
            Box::new(m20160315_154654_create_cards::Migration),
            Box::new(m20160316_132359_create_transactions::Migration),
            Box::new(m20160317_121302_create_subscriptions::Migration),
            Box::new(m20160318_094506_create_paykeys::Migration),
            Box::new(m20160318_170423_add_transactions_group_index::Migration),
            Box::new(m20160319_231916_rename_card_to_paymentmethod::Migration),
            Box::new(m20160324_220433_add_group_profile_columns::Migration),
            Box::new(m20160330_121745_add_tags_to_groups::Migration),
            Box::new(m20160401_093912_backfill_transaction_currency::Migration),
            Box::new(m20160408_165417_create_applications::Migration),
            Box::new(m20160412_184730_add_users_email_unique_index::Migration),
            Box::new(m20160419_174238_add_host_role::Migration),
            Box::new(m20160502_103451_drop_paykeys::Migration),
            Box::new(m20160517_134628_backfill_user_username::Migration),
            Box::new(m20160609_112536_create_expenses::Migration),
            Box::new(m20160623_174552_add_activities_group_index::Migration),
            Box::new(m20160719_090000_create_donations::Migration),
            Box::new(m20160801_153104_delete_orphan_transactions::Migration),
            Box::new(m20160905_171315_add_expense_notes::Migration),
            Box::new(m20161004_103245_add_mission_to_groups::Migration),
            Box::new(m20161102_134547_prune_disabled_applications::Migration),
            Box::new(m20170112_130433_add_soft_delete_columns::Migration),
            Box::new(m20170203_142503_drop_card_number_columns::Migration),
            Box::new(m20170314_092144_add_subscriptions_active_index::Migration),
        ]
    }
}
