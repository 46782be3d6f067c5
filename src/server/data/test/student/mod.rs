use crate::server::{
    data::student::StudentRepository,
    error::data::DataError,
    model::student::{CreateStudentParams, UpdateStudentParams},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_by_id;
mod update;
