use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Surveys::Table)
                    .if_not_exists()
                    .col(string(Surveys::Id).primary_key())
                    .col(string(Surveys::Title))
                    .col(string(Surveys::Description).default(""))
                    .col(timestamp_with_time_zone(Surveys::StartDate))
                    .col(timestamp_with_time_zone(Surveys::EndDate))
                    .col(boolean(Surveys::IsPublished).default(false))
                    .col(integer(Surveys::Year).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Surveys::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Surveys {
    Table,
    Id,
    Title,
    Description,
    StartDate,
    EndDate,
    IsPublished,
    Year,
}
