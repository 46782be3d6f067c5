//! Survey data repository for database operations.
//!
//! Each method is a single statement against the `surveys` table. Identifiers arrive as
//! raw strings and are parsed here, so a malformed identifier is reported as
//! `DataError::InvalidIdentifier` before any query runs.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::server::{
    error::data::DataError,
    model::survey::{CreateSurveyParams, Survey, UpdateSurveyParams},
    util::id::{new_record_id, parse_record_id},
};

const ENTITY: &str = "survey";

/// Repository providing database operations for surveys.
pub struct SurveyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyRepository<'a> {
    /// Creates a new SurveyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SurveyRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new survey under a freshly generated identifier.
    ///
    /// # Arguments
    /// - `params` - Survey fields to store
    ///
    /// # Returns
    /// - `Ok(Survey)` - The stored survey including its identifier
    /// - `Err(DataError::Database)` - Database error during insert
    pub async fn create(&self, params: CreateSurveyParams) -> Result<Survey, DataError> {
        let entity = entity::survey::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            is_published: ActiveValue::Set(params.is_published),
            year: ActiveValue::Set(params.year),
        }
        .insert(self.db)
        .await?;

        Ok(Survey::from_entity(entity))
    }

    /// Gets every survey. Order is unspecified.
    ///
    /// # Returns
    /// - `Ok(Vec<Survey>)` - All stored surveys (empty if none)
    /// - `Err(DataError::Database)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Survey>, DataError> {
        let entities = entity::prelude::Survey::find().all(self.db).await?;

        Ok(entities.into_iter().map(Survey::from_entity).collect())
    }

    /// Gets a survey by its identifier.
    ///
    /// # Arguments
    /// - `id` - Identifier as received from the client
    ///
    /// # Returns
    /// - `Ok(Survey)` - The stored survey
    /// - `Err(DataError::InvalidIdentifier)` - `id` is not a valid identifier
    /// - `Err(DataError::NotFound)` - No survey has this identifier
    /// - `Err(DataError::Database)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Survey, DataError> {
        let id = parse_record_id(ENTITY, id)?;

        let entity = entity::prelude::Survey::find_by_id(id.clone())
            .one(self.db)
            .await?
            .ok_or(DataError::NotFound { entity: ENTITY, id })?;

        Ok(Survey::from_entity(entity))
    }

    /// Replaces every field of an existing survey.
    ///
    /// # Arguments
    /// - `params` - Identifier and the new field values
    ///
    /// # Returns
    /// - `Ok(Survey)` - The survey as stored after the update
    /// - `Err(DataError::InvalidIdentifier)` - `params.id` is not a valid identifier
    /// - `Err(DataError::NotFound)` - No survey matched the identifier
    /// - `Err(DataError::Database)` - Database error during update
    pub async fn update(&self, params: UpdateSurveyParams) -> Result<Survey, DataError> {
        let id = parse_record_id(ENTITY, &params.id)?;

        let result = entity::prelude::Survey::update_many()
            .set(entity::survey::ActiveModel {
                title: ActiveValue::Set(params.title.clone()),
                description: ActiveValue::Set(params.description.clone()),
                start_date: ActiveValue::Set(params.start_date),
                end_date: ActiveValue::Set(params.end_date),
                is_published: ActiveValue::Set(params.is_published),
                year: ActiveValue::Set(params.year),
                ..Default::default()
            })
            .filter(entity::survey::Column::Id.eq(id.clone()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound { entity: ENTITY, id });
        }

        Ok(Survey {
            id,
            title: params.title,
            description: params.description,
            start_date: params.start_date,
            end_date: params.end_date,
            is_published: params.is_published,
            year: params.year,
        })
    }

    /// Deletes a survey.
    ///
    /// Sections referencing the survey are left untouched.
    ///
    /// # Arguments
    /// - `id` - Identifier as received from the client
    ///
    /// # Returns
    /// - `Ok(())` - Survey deleted
    /// - `Err(DataError::InvalidIdentifier)` - `id` is not a valid identifier
    /// - `Err(DataError::NotFound)` - No survey matched the identifier
    /// - `Err(DataError::Database)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<(), DataError> {
        let id = parse_record_id(ENTITY, id)?;

        let result = entity::prelude::Survey::delete_by_id(id.clone())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound { entity: ENTITY, id });
        }

        Ok(())
    }
}
