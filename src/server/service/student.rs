use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::student::StudentError,
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student with a unique email and phone number.
    ///
    /// Uniqueness is checked by scanning every stored student, so two concurrent
    /// creates with the same contact can both succeed.
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student with both timestamps set to now
    /// - `Err(StudentError::DuplicateContact)` - Email or phone number already in use
    /// - `Err(StudentError::Data)` - Storage failure
    pub async fn create(&self, mut params: CreateStudentParams) -> Result<Student, StudentError> {
        let repo = StudentRepository::new(self.db);

        let students = repo.get_all().await?;
        if students
            .iter()
            .any(|s| s.shares_contact_with(&params.email, &params.phone_number))
        {
            tracing::debug!(
                "Rejected student {:?}: email or phone number already registered",
                params.name
            );
            return Err(StudentError::DuplicateContact);
        }

        let now = Utc::now().timestamp();
        params.created_at = now;
        params.updated_at = now;

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, StudentError> {
        let repo = StudentRepository::new(self.db);
        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Student, StudentError> {
        let repo = StudentRepository::new(self.db);
        Ok(repo.get_by_id(id).await?)
    }

    /// Replaces a student's editable fields and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Student)` - The student as stored after the update
    /// - `Err(StudentError::Data)` - Student missing, identifier malformed or storage failure
    pub async fn update(&self, mut params: UpdateStudentParams) -> Result<Student, StudentError> {
        let repo = StudentRepository::new(self.db);

        repo.get_by_id(&params.id).await?;

        params.updated_at = Utc::now().timestamp();

        Ok(repo.update(params).await?)
    }

    /// Deletes a student.
    ///
    /// # Returns
    /// - `Ok(())` - Student deleted
    /// - `Err(StudentError::NotFound)` - The existence check failed
    /// - `Err(StudentError::Data)` - The delete itself failed
    pub async fn delete(&self, id: &str) -> Result<(), StudentError> {
        let repo = StudentRepository::new(self.db);

        if let Err(e) = repo.get_by_id(id).await {
            tracing::debug!("Student delete for {:?} rejected: {}", id, e);
            return Err(StudentError::NotFound);
        }

        Ok(repo.delete(id).await?)
    }
}
