use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::blog::BlogRepository,
    error::AppError,
    model::blog::{Blog, CreateBlogParams, UpdateBlogParams},
    util::parse::parse_blog_id,
};

pub struct BlogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Blog>, AppError> {
        let repo = BlogRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a blog with its author
    ///
    /// # Returns
    /// - `Ok(Blog)` - The blog
    /// - `Err(AppError::BadRequest)` - The key is not a UUID
    /// - `Err(AppError::NotFound)` - No blog with this ID
    pub async fn get_by_id(&self, id: &str) -> Result<Blog, AppError> {
        let id = parse_blog_id(id)?;
        let repo = BlogRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Creates a blog, rejecting an author that does not exist
    pub async fn create(&self, params: CreateBlogParams) -> Result<Blog, AppError> {
        let repo = BlogRepository::new(self.db);

        let blog = repo.create(params).await.map_err(author_error)?;

        tracing::info!("Created blog {} by author {}", blog.id, blog.author_id);

        Ok(blog)
    }

    pub async fn update(&self, id: &str, params: UpdateBlogParams) -> Result<Blog, AppError> {
        let id = parse_blog_id(id)?;
        let repo = BlogRepository::new(self.db);

        repo.update(id, params)
            .await
            .map_err(author_error)?
            .ok_or_else(|| not_found(id))
    }

    /// Permanently deletes a blog
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_blog_id(id)?;
        let repo = BlogRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted blog {}", id);

        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Blog not found with ID: {}", id))
}

/// Maps a foreign key violation on `author_id` to a client error.
fn author_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            AppError::BadRequest("Author not found".to_string())
        }
        _ => err.into(),
    }
}
