use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TextAnswers::Table)
                    .if_not_exists()
                    .col(string(TextAnswers::Id).primary_key())
                    .col(string(TextAnswers::QuestionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MultipleAnswers::Table)
                    .if_not_exists()
                    .col(string(MultipleAnswers::Id).primary_key())
                    .col(string(MultipleAnswers::QuestionId))
                    .col(json(MultipleAnswers::ListOfOptions))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MultipleAnswers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TextAnswers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TextAnswers {
    Table,
    Id,
    QuestionId,
}

#[derive(DeriveIden)]
pub enum MultipleAnswers {
    Table,
    Id,
    QuestionId,
    ListOfOptions,
}
