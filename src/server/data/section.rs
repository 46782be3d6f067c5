//! Section data repository for database operations.
//!
//! The repository stores `survey_id` as given; resolving it against the survey
//! collection is the section service's job.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::server::{
    error::data::DataError,
    model::section::{CreateSectionParams, Section, UpdateSectionParams},
    util::id::{new_record_id, parse_record_id},
};

const ENTITY: &str = "section";

/// Repository providing database operations for sections.
pub struct SectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectionRepository<'a> {
    /// Creates a new SectionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SectionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new section under a freshly generated identifier.
    ///
    /// # Returns
    /// - `Ok(Section)` - The stored section including its identifier
    /// - `Err(DataError::Database)` - Database error during insert
    pub async fn create(&self, params: CreateSectionParams) -> Result<Section, DataError> {
        let entity = entity::section::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            survey_id: ActiveValue::Set(params.survey_id),
        }
        .insert(self.db)
        .await?;

        Ok(Section::from_entity(entity))
    }

    /// Gets every section. Order is unspecified.
    pub async fn get_all(&self) -> Result<Vec<Section>, DataError> {
        let entities = entity::prelude::Section::find().all(self.db).await?;

        Ok(entities.into_iter().map(Section::from_entity).collect())
    }

    /// Gets a section by its identifier.
    ///
    /// # Returns
    /// - `Ok(Section)` - The stored section
    /// - `Err(DataError::InvalidIdentifier)` - `id` is not a valid identifier
    /// - `Err(DataError::NotFound)` - No section has this identifier
    /// - `Err(DataError::Database)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Section, DataError> {
        let id = parse_record_id(ENTITY, id)?;

        let entity = entity::prelude::Section::find_by_id(id.clone())
            .one(self.db)
            .await?
            .ok_or(DataError::NotFound { entity: ENTITY, id })?;

        Ok(Section::from_entity(entity))
    }

    /// Replaces every field of an existing section.
    ///
    /// # Returns
    /// - `Ok(Section)` - The section as stored after the update
    /// - `Err(DataError::InvalidIdentifier)` - `params.id` is not a valid identifier
    /// - `Err(DataError::NotFound)` - No section matched the identifier
    /// - `Err(DataError::Database)` - Database error during update
    pub async fn update(&self, params: UpdateSectionParams) -> Result<Section, DataError> {
        let id = parse_record_id(ENTITY, &params.id)?;

        let result = entity::prelude::Section::update_many()
            .set(entity::section::ActiveModel {
                title: ActiveValue::Set(params.title.clone()),
                description: ActiveValue::Set(params.description.clone()),
                survey_id: ActiveValue::Set(params.survey_id.clone()),
                ..Default::default()
            })
            .filter(entity::section::Column::Id.eq(id.clone()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound { entity: ENTITY, id });
        }

        Ok(Section {
            id,
            title: params.title,
            description: params.description,
            survey_id: params.survey_id,
        })
    }

    /// Deletes a section.
    ///
    /// # Returns
    /// - `Ok(())` - Section deleted
    /// - `Err(DataError::InvalidIdentifier)` - `id` is not a valid identifier
    /// - `Err(DataError::NotFound)` - No section matched the identifier
    /// - `Err(DataError::Database)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<(), DataError> {
        let id = parse_record_id(ENTITY, id)?;

        let result = entity::prelude::Section::delete_by_id(id.clone())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound { entity: ENTITY, id });
        }

        Ok(())
    }
}
