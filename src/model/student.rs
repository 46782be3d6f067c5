use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub university_name: String,
    pub start_year: i32,
    pub is_active: bool,
    /// Unix seconds, set by the server
    pub created_at: i64,
    /// Unix seconds, set by the server
    pub updated_at: i64,
}

/// Request body for `POST /students`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateStudentDto {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub university_name: String,
    pub start_year: i32,
    pub is_active: bool,
}

/// Request body for `PUT /students/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateStudentDto {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub university_name: String,
    pub start_year: i32,
    pub is_active: bool,
}
