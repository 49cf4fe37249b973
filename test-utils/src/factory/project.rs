//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test projects with customizable fields.
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    markdown_url: String,
    image_url: String,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Project {id}"`
    /// - description: `"Description for project {id}"`
    /// - markdown_url / image_url: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Project {}", id),
            description: format!("Description for project {}", id),
            markdown_url: String::new(),
            image_url: String::new(),
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

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now();
        entity::project::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            markdown_url: ActiveValue::Set(self.markdown_url),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values.
pub async fn create_project(db: &DatabaseConnection) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).build().await
}
