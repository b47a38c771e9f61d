pub use sea_orm_migration::prelude::*;

mod m20250610_000001_auth_account;
mod m20250610_000002_backoffice_user;
mod m20250610_000003_offer;
mod m20250610_000004_event;
mod m20250610_000005_banner;
mod m20250610_000006_benefit;
mod m20250610_000007_web_config;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_000001_auth_account::Migration),
            Box::new(m20250610_000002_backoffice_user::Migration),
            Box::new(m20250610_000003_offer::Migration),
            Box::new(m20250610_000004_event::Migration),
            Box::new(m20250610_000005_banner::Migration),
            Box::new(m20250610_000006_benefit::Migration),
            Box::new(m20250610_000007_web_config::Migration),
        ]
    }
}
