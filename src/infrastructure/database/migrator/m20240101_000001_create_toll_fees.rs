//! Create toll_fees table

use chrono::TimeZone;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Default fee schedule: the standard congestion-tax bands.
/// (fee, band start, band stop); the stop minute is inclusive.
const DEFAULT_SCHEDULE: [(i32, (u32, u32), (u32, u32)); 9] = [
    (8, (6, 0), (6, 29)),
    (13, (6, 30), (6, 59)),
    (18, (7, 0), (7, 59)),
    (13, (8, 0), (8, 29)),
    (8, (8, 30), (14, 59)),
    (13, (15, 0), (15, 29)),
    (18, (15, 30), (16, 59)),
    (13, (17, 0), (17, 59)),
    (8, (18, 0), (18, 29)),
];

/// Band times are stored on a fixed epoch date; only hour:minute matters.
fn band_time(hour: u32, minute: u32) -> String {
    chrono::Utc
        .with_ymd_and_hms(2024, 1, 1, hour, minute, 0)
        .unwrap()
        .to_rfc3339()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TollFees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TollFees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TollFees::Fee)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TollFees::Start)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TollFees::Stop)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TollFees::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TollFees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TollFees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Seed the default schedule
        let now = chrono::Utc::now().to_rfc3339();
        let mut insert = Query::insert()
            .into_table(TollFees::Table)
            .columns([
                TollFees::Fee,
                TollFees::Start,
                TollFees::Stop,
                TollFees::IsActive,
                TollFees::CreatedAt,
                TollFees::UpdatedAt,
            ])
            .to_owned();

        for (fee, (start_h, start_m), (stop_h, stop_m)) in DEFAULT_SCHEDULE {
            insert.values_panic([
                fee.into(),
                band_time(start_h, start_m).into(),
                band_time(stop_h, stop_m).into(),
                true.into(),
                now.clone().into(),
                now.clone().into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TollFees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TollFees {
    Table,
    Id,
    Fee,
    Start,
    Stop,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
