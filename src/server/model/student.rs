//! Student domain models and parameters.
//!
//! Timestamps are Unix seconds and are always stamped by the student service; request
//! bodies cannot set them.

use crate::{
    model::student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    server::error::AppError,
};

const REQUIRED_FIELDS_MESSAGE: &str =
    "Name, Email, Phone Number, University Name, and Start Year are required";

/// Student record with contact details and enrollment info.
///
/// Email and phone number are unique across students at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub university_name: String,
    pub start_year: i32,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Student {
    /// Converts the student domain model to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            university_name: self.university_name,
            start_year: self.start_year,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a student domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone_number: entity.phone_number,
            university_name: entity.university_name,
            start_year: entity.start_year,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether this student shares an email or phone number with the given contact.
    pub fn shares_contact_with(&self, email: &str, phone_number: &str) -> bool {
        self.email == email || self.phone_number == phone_number
    }
}

/// Parameters for creating a student.
///
/// The timestamps start at zero and are stamped by `StudentService::create`.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub university_name: String,
    pub start_year: i32,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl CreateStudentParams {
    /// Converts the request DTO into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateStudentParams)` - All required fields are present
    /// - `Err(AppError::BadRequest)` - A string field is empty or start year is zero
    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, AppError> {
        if dto.name.is_empty()
            || dto.email.is_empty()
            || dto.phone_number.is_empty()
            || dto.university_name.is_empty()
            || dto.start_year == 0
        {
            return Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self {
            name: dto.name,
            email: dto.email,
            phone_number: dto.phone_number,
            university_name: dto.university_name,
            start_year: dto.start_year,
            is_active: dto.is_active,
            created_at: 0,
            updated_at: 0,
        })
    }
}

/// Parameters for replacing an existing student.
///
/// `created_at` is not part of the update; the repository keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub university_name: String,
    pub start_year: i32,
    pub is_active: bool,
    pub updated_at: i64,
}

impl UpdateStudentParams {
    /// Converts the request DTO into update parameters.
    ///
    /// Updates are not checked for required fields.
    pub fn from_dto(id: String, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            name: dto.name,
            email: dto.email,
            phone_number: dto.phone_number,
            university_name: dto.university_name,
            start_year: dto.start_year,
            is_active: dto.is_active,
            updated_at: 0,
        }
    }
}
