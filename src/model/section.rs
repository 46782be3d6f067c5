use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectionDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub survey_id: String,
}

/// Request body for `POST /sections`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateSectionDto {
    pub title: String,
    pub description: String,
    /// Identifier of an existing survey
    pub survey_id: String,
}

/// Request body for `PUT /sections/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateSectionDto {
    pub title: String,
    pub description: String,
    /// Identifier of an existing survey
    pub survey_id: String,
}
