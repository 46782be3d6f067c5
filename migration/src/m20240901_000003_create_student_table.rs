use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(string(Students::Id).primary_key())
                    .col(string(Students::Name))
                    .col(string(Students::Email))
                    .col(string(Students::PhoneNumber))
                    .col(string(Students::UniversityName))
                    .col(integer(Students::StartYear))
                    .col(boolean(Students::IsActive).default(false))
                    .col(big_integer(Students::CreatedAt))
                    .col(big_integer(Students::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    Id,
    Name,
    Email,
    PhoneNumber,
    UniversityName,
    StartYear,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
