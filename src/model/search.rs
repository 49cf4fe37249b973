use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{blog::BlogDto, member::MemberDto, project::ProjectDto};

#[derive(Deserialize, IntoParams)]
pub struct SearchQueryDto {
    /// Free-text, case-insensitive substring to look for.
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    pub members: Vec<MemberDto>,
    pub projects: Vec<ProjectDto>,
    pub blogs: Vec<BlogDto>,
}
