use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::member::MemberDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub markdown_url: String,
    pub author_id: Uuid,
    /// Embedded author; `null` when the referenced member no longer exists.
    pub author: Option<MemberDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub markdown_url: String,
    pub author_id: Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub markdown_url: Option<String>,
    #[serde(default)]
    pub author_id: Option<Uuid>,
}
