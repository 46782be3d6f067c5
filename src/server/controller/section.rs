use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        section::{CreateSectionDto, SectionDto, UpdateSectionDto},
    },
    server::{
        controller::decode_payload,
        error::AppError,
        model::section::{CreateSectionParams, UpdateSectionParams},
        service::section::SectionService,
        state::AppState,
    },
};

/// Tag for grouping section endpoints in OpenAPI documentation
pub static SECTION_TAG: &str = "section";

/// Create a section for an existing survey.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Section creation data including the owning survey's ID
///
/// # Returns
/// - `201 Created` - Section stored
/// - `400 Bad Request` - Malformed body or missing title
/// - `500 Internal Server Error` - Survey ID does not resolve, or storage failure
#[utoipa::path(
    post,
    path = "/sections",
    tag = SECTION_TAG,
    request_body = CreateSectionDto,
    responses(
        (status = 201, description = "Successfully created section", body = SectionDto),
        (status = 400, description = "Invalid section data", body = ErrorDto),
        (status = 500, description = "Could not create section", body = ErrorDto)
    ),
)]
pub async fn create_section(
    State(state): State<AppState>,
    payload: Result<Json<CreateSectionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateSectionParams::from_dto(decode_payload(payload)?)?;

    let section = SectionService::new(&state.db)
        .create(params)
        .await
        .map_err(|e| AppError::InternalError(format!("Could not create section: {}", e)))?;

    Ok((StatusCode::CREATED, Json(section.into_dto())))
}

/// List all sections.
#[utoipa::path(
    get,
    path = "/sections",
    tag = SECTION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved sections", body = Vec<SectionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sections(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sections = SectionService::new(&state.db)
        .get_all()
        .await
        .map_err(|e| AppError::InternalError(format!("Could not retrieve sections: {}", e)))?;

    let sections: Vec<SectionDto> = sections.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(sections)))
}

/// Get a section by ID.
#[utoipa::path(
    get,
    path = "/sections/{id}",
    tag = SECTION_TAG,
    params(
        ("id" = String, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved section", body = SectionDto),
        (status = 404, description = "Section not found", body = ErrorDto)
    ),
)]
pub async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let section = SectionService::new(&state.db)
        .get_by_id(&id)
        .await
        .map_err(|_| AppError::NotFound("Section not found".to_string()))?;

    Ok((StatusCode::OK, Json(section.into_dto())))
}

/// Replace a section.
///
/// The survey reference is checked again on every update.
///
/// # Returns
/// - `200 OK` - The updated section
/// - `400 Bad Request` - Malformed body or missing title
/// - `404 Not Found` - Section missing, survey ID does not resolve, or storage failure
#[utoipa::path(
    put,
    path = "/sections/{id}",
    tag = SECTION_TAG,
    params(
        ("id" = String, Path, description = "Section ID")
    ),
    request_body = UpdateSectionDto,
    responses(
        (status = 200, description = "Successfully updated section", body = SectionDto),
        (status = 400, description = "Invalid section data", body = ErrorDto),
        (status = 404, description = "Could not update section", body = ErrorDto)
    ),
)]
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSectionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateSectionParams::from_dto(id, decode_payload(payload)?)?;

    let section = SectionService::new(&state.db)
        .update(params)
        .await
        .map_err(|e| AppError::NotFound(format!("Could not update section: {}", e)))?;

    Ok((StatusCode::OK, Json(section.into_dto())))
}

/// Delete a section.
#[utoipa::path(
    delete,
    path = "/sections/{id}",
    tag = SECTION_TAG,
    params(
        ("id" = String, Path, description = "Section ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted section"),
        (status = 404, description = "Section not found", body = ErrorDto)
    ),
)]
pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    SectionService::new(&state.db)
        .delete(&id)
        .await
        .map_err(|_| AppError::NotFound("Section not found".to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}
