use crate::server::{
    data::blog::BlogRepository,
    model::blog::{CreateBlogParams, UpdateBlogParams},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_id;
mod search;
mod update;
