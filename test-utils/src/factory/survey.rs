//! Survey factory for creating test survey records.

use crate::factory::helpers::{new_record_id, next_id};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test surveys with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::survey::SurveyFactory;
///
/// let survey = SurveyFactory::new(&db)
///     .title("Tracer Study")
///     .year(2023)
///     .build()
///     .await?;
/// ```
pub struct SurveyFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::survey::Model,
}

impl<'a> SurveyFactory<'a> {
    /// Creates a new SurveyFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Survey {n}"`
    /// - start_date: now, end_date: 30 days later
    /// - is_published: `false`
    /// - year: `2024`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SurveyFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        let now = Utc::now();

        Self {
            db,
            entity: entity::survey::Model {
                id: new_record_id(),
                title: format!("Survey {}", n),
                description: format!("Description for survey {}", n),
                start_date: now,
                end_date: now + Duration::days(30),
                is_published: false,
                year: 2024,
            },
        }
    }

    /// Sets the survey title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the survey start and end dates.
    ///
    /// # Arguments
    /// - `start_date` - When the survey opens
    /// - `end_date` - When the survey closes
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn dates(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.entity.start_date = start_date;
        self.entity.end_date = end_date;
        self
    }

    /// Sets the published flag.
    pub fn published(mut self, is_published: bool) -> Self {
        self.entity.is_published = is_published;
        self
    }

    /// Sets the survey year.
    pub fn year(mut self, year: i32) -> Self {
        self.entity.year = year;
        self
    }

    /// Builds and inserts the survey entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::survey::Model)` - Created survey entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::survey::Model, DbErr> {
        entity::survey::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            title: ActiveValue::Set(self.entity.title),
            description: ActiveValue::Set(self.entity.description),
            start_date: ActiveValue::Set(self.entity.start_date),
            end_date: ActiveValue::Set(self.entity.end_date),
            is_published: ActiveValue::Set(self.entity.is_published),
            year: ActiveValue::Set(self.entity.year),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a survey with default values.
///
/// Shorthand for `SurveyFactory::new(db).build().await`.
pub async fn create_survey(db: &DatabaseConnection) -> Result<entity::survey::Model, DbErr> {
    SurveyFactory::new(db).build().await
}
