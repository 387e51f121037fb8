//! Create toll_free_dates table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TollFreeDates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TollFreeDates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TollFreeDates::Start)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TollFreeDates::Stop)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TollFreeDates::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TollFreeDates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TollFreeDates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Ranges are scanned by the active flag on every calculation
        manager
            .create_index(
                Index::create()
                    .name("idx_toll_free_dates_is_active")
                    .table(TollFreeDates::Table)
                    .col(TollFreeDates::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TollFreeDates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TollFreeDates {
    Table,
    Id,
    Start,
    Stop,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
