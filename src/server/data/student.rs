//! Student data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::server::{
    error::data::DataError,
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
    util::id::{new_record_id, parse_record_id},
};

const ENTITY: &str = "student";

/// Repository providing database operations for students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new student under a freshly generated identifier.
    ///
    /// Timestamps are stored exactly as given in `params`.
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student including its identifier
    /// - `Err(DataError::Database)` - Database error during insert
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DataError> {
        let entity = entity::student::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone_number: ActiveValue::Set(params.phone_number),
            university_name: ActiveValue::Set(params.university_name),
            start_year: ActiveValue::Set(params.start_year),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(params.created_at),
            updated_at: ActiveValue::Set(params.updated_at),
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Gets every student. Order is unspecified.
    pub async fn get_all(&self) -> Result<Vec<Student>, DataError> {
        let entities = entity::prelude::Student::find().all(self.db).await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets a student by its identifier.
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student
    /// - `Err(DataError::InvalidIdentifier)` - `id` is not a valid identifier
    /// - `Err(DataError::NotFound)` - No student has this identifier
    /// - `Err(DataError::Database)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Student, DataError> {
        let id = parse_record_id(ENTITY, id)?;

        let entity = entity::prelude::Student::find_by_id(id.clone())
            .one(self.db)
            .await?
            .ok_or(DataError::NotFound { entity: ENTITY, id })?;

        Ok(Student::from_entity(entity))
    }

    /// Replaces the caller-editable fields of an existing student.
    ///
    /// `created_at` keeps its stored value; `updated_at` is written from `params`.
    /// The returned student is re-read so it carries the stored `created_at`.
    ///
    /// # Returns
    /// - `Ok(Student)` - The student as stored after the update
    /// - `Err(DataError::InvalidIdentifier)` - `params.id` is not a valid identifier
    /// - `Err(DataError::NotFound)` - No student matched the identifier
    /// - `Err(DataError::Database)` - Database error during update
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, DataError> {
        let id = parse_record_id(ENTITY, &params.id)?;

        let result = entity::prelude::Student::update_many()
            .set(entity::student::ActiveModel {
                name: ActiveValue::Set(params.name),
                email: ActiveValue::Set(params.email),
                phone_number: ActiveValue::Set(params.phone_number),
                university_name: ActiveValue::Set(params.university_name),
                start_year: ActiveValue::Set(params.start_year),
                is_active: ActiveValue::Set(params.is_active),
                updated_at: ActiveValue::Set(params.updated_at),
                ..Default::default()
            })
            .filter(entity::student::Column::Id.eq(id.clone()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound { entity: ENTITY, id });
        }

        let entity = entity::prelude::Student::find_by_id(id.clone())
            .one(self.db)
            .await?
            .ok_or(DataError::NotFound { entity: ENTITY, id })?;

        Ok(Student::from_entity(entity))
    }

    /// Deletes a student.
    ///
    /// # Returns
    /// - `Ok(())` - Student deleted
    /// - `Err(DataError::InvalidIdentifier)` - `id` is not a valid identifier
    /// - `Err(DataError::NotFound)` - No student matched the identifier
    /// - `Err(DataError::Database)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<(), DataError> {
        let id = parse_record_id(ENTITY, id)?;

        let result = entity::prelude::Student::delete_by_id(id.clone())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound { entity: ENTITY, id });
        }

        Ok(())
    }
}
