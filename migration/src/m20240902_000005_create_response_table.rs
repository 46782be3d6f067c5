use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Responses::Table)
                    .if_not_exists()
                    .col(string(Responses::Id).primary_key())
                    .col(string(Responses::SurveyId))
                    .col(string(Responses::StudentId))
                    .col(json(Responses::ListQuestionAnswer))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Responses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Responses {
    Table,
    Id,
    SurveyId,
    StudentId,
    ListQuestionAnswer,
}
