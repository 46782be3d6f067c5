use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        section::{CreateSectionDto, SectionDto, UpdateSectionDto},
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
        survey::{CreateSurveyDto, SurveyDto, UpdateSurveyDto},
    },
    server::{
        controller::{
            section::{
                self, create_section, delete_section, get_section, get_sections, update_section,
            },
            student::{
                self, create_student, delete_student, get_student, get_students, update_student,
            },
            survey::{
                self, create_survey, delete_survey, get_survey, get_surveys, update_survey,
            },
        },
        state::AppState,
    },
};

/// OpenAPI document covering every endpoint, served by Swagger UI at `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    paths(
        survey::create_survey,
        survey::get_surveys,
        survey::get_survey,
        survey::update_survey,
        survey::delete_survey,
        section::create_section,
        section::get_sections,
        section::get_section,
        section::update_section,
        section::delete_section,
        student::create_student,
        student::get_students,
        student::get_student,
        student::update_student,
        student::delete_student,
    ),
    components(schemas(
        ErrorDto,
        SurveyDto,
        CreateSurveyDto,
        UpdateSurveyDto,
        SectionDto,
        CreateSectionDto,
        UpdateSectionDto,
        StudentDto,
        CreateStudentDto,
        UpdateStudentDto,
    )),
    tags(
        (name = "survey", description = "Survey scheduling and publication"),
        (name = "section", description = "Sections within a survey"),
        (name = "student", description = "Student registration"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/surveys", get(get_surveys).post(create_survey))
        .route(
            "/surveys/{id}",
            get(get_survey).put(update_survey).delete(delete_survey),
        )
        .route("/sections", get(get_sections).post(create_section))
        .route(
            "/sections/{id}",
            get(get_section).put(update_section).delete(delete_section),
        )
        .route("/students", get(get_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
