use crate::server::{
    data::project::ProjectRepository,
    model::project::{CreateProjectParams, UpdateProjectParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod search;
mod update;
