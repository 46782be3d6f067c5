pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_survey_table;
mod m20240901_000002_create_section_table;
mod m20240901_000003_create_student_table;
mod m20240902_000004_create_question_table;
mod m20240902_000005_create_response_table;
mod m20240902_000006_create_answer_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_survey_table::Migration),
            Box::new(m20240901_000002_create_section_table::Migration),
            Box::new(m20240901_000003_create_student_table::Migration),
            Box::new(m20240902_000004_create_question_table::Migration),
            Box::new(m20240902_000005_create_response_table::Migration),
            Box::new(m20240902_000006_create_answer_tables::Migration),
        ]
    }
}
