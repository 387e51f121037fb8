//! Create toll_free_vehicles table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Default exempt vehicle classes
const DEFAULT_EXEMPT_CLASSES: [&str; 6] = [
    "Motorbike",
    "Tractor",
    "Emergency",
    "Diplomat",
    "Foreign",
    "Military",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TollFreeVehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TollFreeVehicles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TollFreeVehicles::VehicleType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TollFreeVehicles::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TollFreeVehicles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TollFreeVehicles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index on vehicle type
        manager
            .create_index(
                Index::create()
                    .name("idx_toll_free_vehicles_vehicle_type")
                    .table(TollFreeVehicles::Table)
                    .col(TollFreeVehicles::VehicleType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Seed the default exempt classes
        let now = chrono::Utc::now().to_rfc3339();
        let mut insert = Query::insert()
            .into_table(TollFreeVehicles::Table)
            .columns([
                TollFreeVehicles::VehicleType,
                TollFreeVehicles::IsActive,
                TollFreeVehicles::CreatedAt,
                TollFreeVehicles::UpdatedAt,
            ])
            .to_owned();

        for vehicle_type in DEFAULT_EXEMPT_CLASSES {
            insert.values_panic([
                vehicle_type.into(),
                true.into(),
                now.clone().into(),
                now.clone().into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TollFreeVehicles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TollFreeVehicles {
    Table,
    Id,
    VehicleType,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
