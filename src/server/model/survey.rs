//! Survey domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::survey::{CreateSurveyDto, SurveyDto, UpdateSurveyDto},
    server::error::AppError,
};

const REQUIRED_FIELDS_MESSAGE: &str = "Title, Start Date, and End Date are required";

/// Survey with its scheduling window and publication state.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    /// Server-generated identifier (32 lowercase hex characters).
    pub id: String,
    pub title: String,
    pub description: String,
    /// When the survey opens; never after `end_date`.
    pub start_date: DateTime<Utc>,
    /// When the survey closes.
    pub end_date: DateTime<Utc>,
    pub is_published: bool,
    /// Survey year; never later than the current year at creation.
    pub year: i32,
}

impl Survey {
    /// Converts the survey domain model to a DTO for API responses.
    pub fn into_dto(self) -> SurveyDto {
        SurveyDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            is_published: self.is_published,
            year: self.year,
        }
    }

    /// Converts an entity model to a survey domain model at the repository boundary.
    pub fn from_entity(entity: entity::survey::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            is_published: entity.is_published,
            year: entity.year,
        }
    }
}

/// Parameters for creating a survey.
#[derive(Debug, Clone)]
pub struct CreateSurveyParams {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_published: bool,
    pub year: i32,
}

impl CreateSurveyParams {
    /// Converts the request DTO into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateSurveyParams)` - Title and both dates were supplied
    /// - `Err(AppError::BadRequest)` - Title is empty or a date is missing
    pub fn from_dto(dto: CreateSurveyDto) -> Result<Self, AppError> {
        match (dto.title.is_empty(), dto.start_date, dto.end_date) {
            (false, Some(start_date), Some(end_date)) => Ok(Self {
                title: dto.title,
                description: dto.description,
                start_date,
                end_date,
                is_published: dto.is_published,
                year: dto.year,
            }),
            _ => Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// Parameters for replacing an existing survey.
///
/// `id` is the identifier exactly as received in the request path; the repository
/// parses it.
#[derive(Debug, Clone)]
pub struct UpdateSurveyParams {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_published: bool,
    pub year: i32,
}

impl UpdateSurveyParams {
    /// Converts the request DTO into update parameters.
    ///
    /// # Returns
    /// - `Ok(UpdateSurveyParams)` - Title and both dates were supplied
    /// - `Err(AppError::BadRequest)` - Title is empty or a date is missing
    pub fn from_dto(id: String, dto: UpdateSurveyDto) -> Result<Self, AppError> {
        match (dto.title.is_empty(), dto.start_date, dto.end_date) {
            (false, Some(start_date), Some(end_date)) => Ok(Self {
                id,
                title: dto.title,
                description: dto.description,
                start_date,
                end_date,
                is_published: dto.is_published,
                year: dto.year,
            }),
            _ => Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}
