//! Blog factory for creating test blog entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test blogs with customizable fields.
///
/// The author must already exist; the blog table enforces the reference.
pub struct BlogFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: Uuid,
    title: String,
    description: String,
    markdown_url: String,
}

impl<'a> BlogFactory<'a> {
    /// Creates a new BlogFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Blog {id}"`
    /// - description: `"Description for blog {id}"`
    /// - markdown_url: empty
    pub fn new(db: &'a DatabaseConnection, author_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Blog {}", id),
            description: format!("Description for blog {}", id),
            markdown_url: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn markdown_url(mut self, markdown_url: impl Into<String>) -> Self {
        self.markdown_url = markdown_url.into();
        self
    }

    /// Builds and inserts the blog entity into the database.
    pub async fn build(self) -> Result<entity::blog::Model, DbErr> {
        let now = Utc::now();
        entity::blog::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            markdown_url: ActiveValue::Set(self.markdown_url),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blog with default values for the given author.
pub async fn create_blog(
    db: &DatabaseConnection,
    author_id: Uuid,
) -> Result<entity::blog::Model, DbErr> {
    BlogFactory::new(db, author_id).build().await
}
