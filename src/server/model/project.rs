//! Project domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::project::{CreateProjectDto, ProjectDto, UpdateProjectDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub markdown_url: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            markdown_url: entity.markdown_url,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            title: self.title,
            description: self.description,
            markdown_url: self.markdown_url,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub title: String,
    pub description: String,
    pub markdown_url: String,
    pub image_url: String,
}

impl CreateProjectParams {
    pub fn from_dto(dto: CreateProjectDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            markdown_url: dto.markdown_url,
            image_url: dto.image_url,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub markdown_url: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateProjectParams {
    pub fn from_dto(dto: UpdateProjectDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            markdown_url: dto.markdown_url,
            image_url: dto.image_url,
        }
    }
}
