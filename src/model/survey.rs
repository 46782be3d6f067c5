use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SurveyDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_published: bool,
    pub year: i32,
}

/// Request body for `POST /surveys`.
///
/// Every field may be omitted during decoding; missing required fields are reported
/// by the controller with a 400 rather than as a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateSurveyDto {
    pub title: String,
    pub description: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub year: i32,
}

/// Request body for `PUT /surveys/{id}`.
///
/// Replaces every field of the stored survey. An `is_published` of `false` keeps the
/// stored flag, so a survey cannot be unpublished through this endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateSurveyDto {
    pub title: String,
    pub description: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub year: i32,
}
