use sea_orm::DatabaseConnection;

use crate::server::{
    data::{section::SectionRepository, survey::SurveyRepository},
    error::section::SectionError,
    model::section::{CreateSectionParams, Section, UpdateSectionParams},
};

pub struct SectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a survey reference to the stored survey identifier.
    ///
    /// # Returns
    /// - `Ok(String)` - Normalized identifier of the referenced survey
    /// - `Err(SectionError::InvalidSurveyReference)` - Identifier is malformed or
    ///   matches no survey
    async fn resolve_survey(&self, survey_id: &str) -> Result<String, SectionError> {
        let survey_repo = SurveyRepository::new(self.db);

        match survey_repo.get_by_id(survey_id).await {
            Ok(survey) => Ok(survey.id),
            Err(e) => {
                tracing::debug!("Rejected section survey reference {:?}: {}", survey_id, e);
                Err(SectionError::InvalidSurveyReference)
            }
        }
    }

    /// Creates a section once its survey reference resolves.
    ///
    /// # Returns
    /// - `Ok(Section)` - The stored section
    /// - `Err(SectionError::InvalidSurveyReference)` - `survey_id` does not resolve
    /// - `Err(SectionError::Data)` - Storage failure
    pub async fn create(&self, mut params: CreateSectionParams) -> Result<Section, SectionError> {
        params.survey_id = self.resolve_survey(&params.survey_id).await?;

        let repo = SectionRepository::new(self.db);
        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Section>, SectionError> {
        let repo = SectionRepository::new(self.db);
        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Section, SectionError> {
        let repo = SectionRepository::new(self.db);
        Ok(repo.get_by_id(id).await?)
    }

    /// Replaces a section once its survey reference resolves.
    ///
    /// # Returns
    /// - `Ok(Section)` - The section as stored after the update
    /// - `Err(SectionError::InvalidSurveyReference)` - `survey_id` does not resolve
    /// - `Err(SectionError::Data)` - Section missing, identifier malformed or storage failure
    pub async fn update(&self, mut params: UpdateSectionParams) -> Result<Section, SectionError> {
        params.survey_id = self.resolve_survey(&params.survey_id).await?;

        let repo = SectionRepository::new(self.db);
        Ok(repo.update(params).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), SectionError> {
        let repo = SectionRepository::new(self.db);
        Ok(repo.delete(id).await?)
    }
}
