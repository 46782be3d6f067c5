//! Section factory for creating test section records.

use crate::factory::helpers::{new_record_id, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sections with customizable fields.
///
/// The survey reference is written as given; the factory does not check that the
/// survey exists, which lets tests arrange dangling references.
pub struct SectionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::section::Model,
}

impl<'a> SectionFactory<'a> {
    /// Creates a new SectionFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `survey_id` - Identifier of the survey this section belongs to
    ///
    /// # Returns
    /// - `SectionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, survey_id: impl Into<String>) -> Self {
        let n = next_id();

        Self {
            db,
            entity: entity::section::Model {
                id: new_record_id(),
                title: format!("Section {}", n),
                description: String::new(),
                survey_id: survey_id.into(),
            },
        }
    }

    /// Sets the section title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the section description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    /// Builds and inserts the section entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::section::Model)` - Created section entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::section::Model, DbErr> {
        entity::section::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            title: ActiveValue::Set(self.entity.title),
            description: ActiveValue::Set(self.entity.description),
            survey_id: ActiveValue::Set(self.entity.survey_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a section with default values for the given survey.
pub async fn create_section(
    db: &DatabaseConnection,
    survey_id: &str,
) -> Result<entity::section::Model, DbErr> {
    SectionFactory::new(db, survey_id).build().await
}
