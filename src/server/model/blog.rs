//! Blog domain models and parameters.
//!
//! A blog always references exactly one member as its author. The author is loaded
//! alongside the blog; it is `None` when the member row is gone or soft-deleted, since
//! nothing at the application level cascades member removal to blogs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::blog::{BlogDto, CreateBlogDto, UpdateBlogDto},
    server::model::member::Member,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub markdown_url: String,
    pub author_id: Uuid,
    pub author: Option<Member>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Converts a blog entity and its optionally joined author into a domain model.
    ///
    /// A soft-deleted author is treated as absent.
    pub fn from_entity(
        entity: entity::blog::Model,
        author: Option<entity::member::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            markdown_url: entity.markdown_url,
            author_id: entity.author_id,
            author: author
                .filter(|member| member.deleted_at.is_none())
                .map(Member::from_entity),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BlogDto {
        BlogDto {
            id: self.id,
            title: self.title,
            description: self.description,
            markdown_url: self.markdown_url,
            author_id: self.author_id,
            author: self.author.map(Member::into_dto),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBlogParams {
    pub title: String,
    pub description: String,
    pub markdown_url: String,
    pub author_id: Uuid,
}

impl CreateBlogParams {
    pub fn from_dto(dto: CreateBlogDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            markdown_url: dto.markdown_url,
            author_id: dto.author_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBlogParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub markdown_url: Option<String>,
    pub author_id: Option<Uuid>,
}

impl UpdateBlogParams {
    pub fn from_dto(dto: UpdateBlogDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            markdown_url: dto.markdown_url,
            author_id: dto.author_id,
        }
    }
}
