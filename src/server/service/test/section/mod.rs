use crate::server::{
    error::{data::DataError, section::SectionError},
    model::section::{CreateSectionParams, UpdateSectionParams},
    service::section::SectionService,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
