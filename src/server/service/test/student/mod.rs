use crate::server::{
    error::{data::DataError, student::StudentError},
    model::student::{CreateStudentParams, UpdateStudentParams},
    service::student::StudentService,
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod update;

fn create_params(email: &str, phone_number: &str) -> CreateStudentParams {
    CreateStudentParams {
        name: "John Doe".to_string(),
        email: email.to_string(),
        phone_number: phone_number.to_string(),
        university_name: "University 1".to_string(),
        start_year: 2021,
        is_active: true,
        created_at: 0,
        updated_at: 0,
    }
}
