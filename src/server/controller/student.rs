use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        controller::decode_payload,
        error::{student::StudentError, AppError},
        model::student::{CreateStudentParams, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Register a student.
///
/// Email and phone number must not belong to any existing student. `created_at` and
/// `updated_at` are set by the server.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student registration data
///
/// # Returns
/// - `201 Created` - Student stored
/// - `400 Bad Request` - Malformed body or a required field is missing
/// - `500 Internal Server Error` - Duplicate email or phone number, or storage failure
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Could not create student", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateStudentParams::from_dto(decode_payload(payload)?)?;

    let student = StudentService::new(&state.db)
        .create(params)
        .await
        .map_err(|e| AppError::InternalError(format!("Could not create student: {}", e)))?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// List all students.
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db)
        .get_all()
        .await
        .map_err(|e| AppError::InternalError(format!("Could not retrieve students: {}", e)))?;

    let students: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(students)))
}

/// Get a student by ID.
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .get_by_id(&id)
        .await
        .map_err(|_| AppError::NotFound("Student not found".to_string()))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Replace a student's details.
///
/// No field is required; `created_at` is kept and `updated_at` refreshed.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Student missing, ID malformed, or storage failure
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Could not update student", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateStudentParams::from_dto(id, decode_payload(payload)?);

    let student = StudentService::new(&state.db)
        .update(params)
        .await
        .map_err(|e| AppError::InternalError(format!("Could not update student: {}", e)))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// # Returns
/// - `204 No Content` - Student deleted
/// - `404 Not Found` - Student missing, or the delete itself failed
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db)
        .delete(&id)
        .await
        .map_err(|e| match e {
            StudentError::NotFound => AppError::NotFound("Student not found".to_string()),
            e => AppError::NotFound(format!("Could not delete student: {}", e)),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
