//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_toll_fees;
mod m20240101_000002_create_toll_free_dates;
mod m20240101_000003_create_toll_free_vehicles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_toll_fees::Migration),
            Box::new(m20240101_000002_create_toll_free_dates::Migration),
            Box::new(m20240101_000003_create_toll_free_vehicles::Migration),
        ]
    }
}
