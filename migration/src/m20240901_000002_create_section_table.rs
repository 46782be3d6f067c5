use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // survey_id is validated by the section service, not by a foreign key:
        // deleting a survey does not touch its sections.
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(string(Sections::Id).primary_key())
                    .col(string(Sections::Title))
                    .col(string(Sections::Description).default(""))
                    .col(string(Sections::SurveyId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sections_survey_id")
                    .table(Sections::Table)
                    .col(Sections::SurveyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sections {
    Table,
    Id,
    Title,
    Description,
    SurveyId,
}
