use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        survey::{CreateSurveyDto, SurveyDto, UpdateSurveyDto},
    },
    server::{
        controller::decode_payload,
        error::AppError,
        model::survey::{CreateSurveyParams, UpdateSurveyParams},
        service::survey::SurveyService,
        state::AppState,
    },
};

/// Tag for grouping survey endpoints in OpenAPI documentation
pub static SURVEY_TAG: &str = "survey";

/// Create a survey.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Survey creation data
///
/// # Returns
/// - `201 Created` - Survey stored
/// - `400 Bad Request` - Malformed body, missing title or dates, start after end, or
///   year in the future
/// - `500 Internal Server Error` - Storage failure
#[utoipa::path(
    post,
    path = "/surveys",
    tag = SURVEY_TAG,
    request_body = CreateSurveyDto,
    responses(
        (status = 201, description = "Successfully created survey", body = SurveyDto),
        (status = 400, description = "Invalid survey data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_survey(
    State(state): State<AppState>,
    payload: Result<Json<CreateSurveyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateSurveyParams::from_dto(decode_payload(payload)?)?;

    let survey = SurveyService::new(&state.db)
        .create(params)
        .await
        .map_err(|e| {
            let message = format!("Could not create survey: {}", e);
            if e.is_validation() {
                AppError::BadRequest(message)
            } else {
                AppError::InternalError(message)
            }
        })?;

    Ok((StatusCode::CREATED, Json(survey.into_dto())))
}

/// List all surveys.
///
/// # Returns
/// - `200 OK` - Every stored survey, order unspecified
/// - `500 Internal Server Error` - Storage failure
#[utoipa::path(
    get,
    path = "/surveys",
    tag = SURVEY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved surveys", body = Vec<SurveyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_surveys(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let surveys = SurveyService::new(&state.db)
        .get_all()
        .await
        .map_err(|e| AppError::InternalError(format!("Could not retrieve surveys: {}", e)))?;

    let surveys: Vec<SurveyDto> = surveys.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(surveys)))
}

/// Get a survey by ID.
///
/// # Returns
/// - `200 OK` - The survey
/// - `404 Not Found` - Survey missing or ID malformed
#[utoipa::path(
    get,
    path = "/surveys/{id}",
    tag = SURVEY_TAG,
    params(
        ("id" = String, Path, description = "Survey ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved survey", body = SurveyDto),
        (status = 404, description = "Survey not found", body = ErrorDto)
    ),
)]
pub async fn get_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let survey = SurveyService::new(&state.db)
        .get_by_id(&id)
        .await
        .map_err(|_| AppError::NotFound("Survey not found".to_string()))?;

    Ok((StatusCode::OK, Json(survey.into_dto())))
}

/// Replace a survey.
///
/// Sending `is_published: false` keeps the stored flag.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Survey ID
/// - `payload` - New survey data
///
/// # Returns
/// - `200 OK` - The updated survey
/// - `400 Bad Request` - Malformed body or missing title or dates
/// - `404 Not Found` - Survey missing, start after end, or storage failure
#[utoipa::path(
    put,
    path = "/surveys/{id}",
    tag = SURVEY_TAG,
    params(
        ("id" = String, Path, description = "Survey ID")
    ),
    request_body = UpdateSurveyDto,
    responses(
        (status = 200, description = "Successfully updated survey", body = SurveyDto),
        (status = 400, description = "Invalid survey data", body = ErrorDto),
        (status = 404, description = "Could not update survey", body = ErrorDto)
    ),
)]
pub async fn update_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSurveyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateSurveyParams::from_dto(id, decode_payload(payload)?)?;

    let survey = SurveyService::new(&state.db)
        .update(params)
        .await
        .map_err(|e| AppError::NotFound(format!("Could not update survey: {}", e)))?;

    Ok((StatusCode::OK, Json(survey.into_dto())))
}

/// Delete a survey.
///
/// Sections referencing the survey are kept.
///
/// # Returns
/// - `204 No Content` - Survey deleted
/// - `404 Not Found` - Survey missing or ID malformed
#[utoipa::path(
    delete,
    path = "/surveys/{id}",
    tag = SURVEY_TAG,
    params(
        ("id" = String, Path, description = "Survey ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted survey"),
        (status = 404, description = "Survey not found", body = ErrorDto)
    ),
)]
pub async fn delete_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    SurveyService::new(&state.db)
        .delete(&id)
        .await
        .map_err(|_| AppError::NotFound("Survey not found".to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}
