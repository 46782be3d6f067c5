//! Section domain models and parameters.

use crate::{
    model::section::{CreateSectionDto, SectionDto, UpdateSectionDto},
    server::error::AppError,
};

const REQUIRED_FIELDS_MESSAGE: &str = "Title is required";

/// Section of a survey.
///
/// `survey_id` is checked against the survey collection whenever the section is
/// written; nothing keeps it valid after the survey is deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub survey_id: String,
}

impl Section {
    /// Converts the section domain model to a DTO for API responses.
    pub fn into_dto(self) -> SectionDto {
        SectionDto {
            id: self.id,
            title: self.title,
            description: self.description,
            survey_id: self.survey_id,
        }
    }

    /// Converts an entity model to a section domain model at the repository boundary.
    pub fn from_entity(entity: entity::section::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            survey_id: entity.survey_id,
        }
    }
}

/// Parameters for creating a section.
///
/// `survey_id` is stored in normalized form once the service has resolved it.
#[derive(Debug, Clone)]
pub struct CreateSectionParams {
    pub title: String,
    pub description: String,
    pub survey_id: String,
}

impl CreateSectionParams {
    /// # Returns
    /// - `Ok(CreateSectionParams)` - Title was supplied
    /// - `Err(AppError::BadRequest)` - Title is empty
    pub fn from_dto(dto: CreateSectionDto) -> Result<Self, AppError> {
        if dto.title.is_empty() {
            return Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self {
            title: dto.title,
            description: dto.description,
            survey_id: dto.survey_id,
        })
    }
}

/// Parameters for replacing an existing section.
#[derive(Debug, Clone)]
pub struct UpdateSectionParams {
    pub id: String,
    pub title: String,
    pub description: String,
    pub survey_id: String,
}

impl UpdateSectionParams {
    /// # Returns
    /// - `Ok(UpdateSectionParams)` - Title was supplied
    /// - `Err(AppError::BadRequest)` - Title is empty
    pub fn from_dto(id: String, dto: UpdateSectionDto) -> Result<Self, AppError> {
        if dto.title.is_empty() {
            return Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self {
            id,
            title: dto.title,
            description: dto.description,
            survey_id: dto.survey_id,
        })
    }
}
