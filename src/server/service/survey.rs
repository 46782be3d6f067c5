use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::survey::SurveyRepository,
    error::survey::SurveyError,
    model::survey::{CreateSurveyParams, Survey, UpdateSurveyParams},
};

pub struct SurveyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a survey after checking its dates and year.
    ///
    /// Rejected surveys never reach storage.
    ///
    /// # Returns
    /// - `Ok(Survey)` - The stored survey
    /// - `Err(SurveyError::InvalidDateRange)` - Start date falls after end date
    /// - `Err(SurveyError::InvalidYear)` - Year is later than the current year
    /// - `Err(SurveyError::Data)` - Storage failure
    pub async fn create(&self, params: CreateSurveyParams) -> Result<Survey, SurveyError> {
        if params.start_date > params.end_date {
            tracing::debug!(
                "Rejected survey {:?}: start {} after end {}",
                params.title,
                params.start_date,
                params.end_date
            );
            return Err(SurveyError::InvalidDateRange);
        }

        let current_year = Utc::now().year();
        if params.year > current_year {
            tracing::debug!(
                "Rejected survey {:?}: year {} after {}",
                params.title,
                params.year,
                current_year
            );
            return Err(SurveyError::InvalidYear {
                year: params.year,
                current_year,
            });
        }

        let repo = SurveyRepository::new(self.db);
        Ok(repo.create(params).await?)
    }

    /// Gets all surveys.
    pub async fn get_all(&self) -> Result<Vec<Survey>, SurveyError> {
        let repo = SurveyRepository::new(self.db);
        Ok(repo.get_all().await?)
    }

    /// Gets a survey by identifier; any lookup failure is reported as `NotFound`.
    pub async fn get_by_id(&self, id: &str) -> Result<Survey, SurveyError> {
        let repo = SurveyRepository::new(self.db);
        repo.get_by_id(id).await.map_err(|e| {
            tracing::debug!("Survey lookup for {:?} failed: {}", id, e);
            SurveyError::NotFound
        })
    }

    /// Replaces an existing survey.
    ///
    /// A `false` published flag keeps the stored value, so a survey cannot be
    /// unpublished through this path.
    ///
    /// # Returns
    /// - `Ok(Survey)` - The survey as stored after the update
    /// - `Err(SurveyError::NotFound)` - Survey missing or identifier malformed
    /// - `Err(SurveyError::InvalidDateRange)` - Start date falls after end date
    /// - `Err(SurveyError::Data)` - Storage failure during the write
    pub async fn update(&self, mut params: UpdateSurveyParams) -> Result<Survey, SurveyError> {
        let repo = SurveyRepository::new(self.db);

        let existing = repo.get_by_id(&params.id).await.map_err(|e| {
            tracing::debug!("Survey lookup for {:?} failed: {}", params.id, e);
            SurveyError::NotFound
        })?;

        if params.start_date > params.end_date {
            tracing::debug!(
                "Rejected update of survey {}: start {} after end {}",
                existing.id,
                params.start_date,
                params.end_date
            );
            return Err(SurveyError::InvalidDateRange);
        }

        if !params.is_published {
            params.is_published = existing.is_published;
        }

        Ok(repo.update(params).await?)
    }

    /// Deletes a survey; any failure is reported as `NotFound`.
    pub async fn delete(&self, id: &str) -> Result<(), SurveyError> {
        let repo = SurveyRepository::new(self.db);
        repo.delete(id).await.map_err(|e| {
            tracing::debug!("Survey delete for {:?} failed: {}", id, e);
            SurveyError::NotFound
        })
    }
}
