//! Student factory for creating test student records.

use crate::factory::helpers::{new_record_id, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .email("user1@example.com")
///     .phone_number("081234567890")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::student::Model,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {n}"`
    /// - email: `"student{n}@example.com"`
    /// - phone_number: `"08{n:010}"`
    /// - university_name: `"University 1"`
    /// - start_year: `2021`
    /// - is_active: `true`
    /// - created_at / updated_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        let now = Utc::now().timestamp();

        Self {
            db,
            entity: entity::student::Model {
                id: new_record_id(),
                name: format!("Student {}", n),
                email: format!("student{}@example.com", n),
                phone_number: format!("08{:010}", n),
                university_name: "University 1".to_string(),
                start_year: 2021,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
        }
    }

    /// Sets the student's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the student's email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    /// Sets the student's phone number.
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.entity.phone_number = phone_number.into();
        self
    }

    /// Sets both timestamps to the given Unix time.
    pub fn timestamps(mut self, unix_seconds: i64) -> Self {
        self.entity.created_at = unix_seconds;
        self.entity.updated_at = unix_seconds;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            email: ActiveValue::Set(self.entity.email),
            phone_number: ActiveValue::Set(self.entity.phone_number),
            university_name: ActiveValue::Set(self.entity.university_name),
            start_year: ActiveValue::Set(self.entity.start_year),
            is_active: ActiveValue::Set(self.entity.is_active),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
