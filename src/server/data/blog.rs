//! Blog data repository for database operations.
//!
//! Blogs are always read together with their author. Unlike members and projects, a
//! deleted blog is removed from the table outright.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::contains_pattern,
    model::blog::{Blog, CreateBlogParams, UpdateBlogParams},
};

/// Repository providing database operations for blogs.
pub struct BlogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all blogs with their authors, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Blog>, DbErr> {
        let blogs = entity::prelude::Blog::find()
            .filter(entity::blog::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::Member)
            .order_by_asc(entity::blog::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(blogs
            .into_iter()
            .map(|(blog, author)| Blog::from_entity(blog, author))
            .collect())
    }

    /// Finds a blog and its author by ID.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Blog>, DbErr> {
        let blog = entity::prelude::Blog::find_by_id(id)
            .filter(entity::blog::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::Member)
            .one(self.db)
            .await?;

        Ok(blog.map(|(blog, author)| Blog::from_entity(blog, author)))
    }

    /// Finds a blog by ID without the soft-delete filter.
    ///
    /// Deleted blogs are gone from the table, so this never finds one either.
    pub async fn get_by_id_with_deleted(&self, id: Uuid) -> Result<Option<Blog>, DbErr> {
        let blog = entity::prelude::Blog::find_by_id(id)
            .find_also_related(entity::prelude::Member)
            .one(self.db)
            .await?;

        Ok(blog.map(|(blog, author)| Blog::from_entity(blog, author)))
    }

    /// Inserts a new blog under a freshly generated ID and returns it with its author.
    ///
    /// The author reference is enforced by the foreign key on `blog.author_id`; an unknown
    /// author surfaces as a `DbErr` carrying a foreign key violation.
    pub async fn create(&self, params: CreateBlogParams) -> Result<Blog, DbErr> {
        let now = Utc::now();

        let blog = entity::blog::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            markdown_url: ActiveValue::Set(params.markdown_url),
            author_id: ActiveValue::Set(params.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        self.get_by_id(blog.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Blog with id {} not found after creation",
                blog.id
            )))
    }

    /// Overlays the provided fields onto an existing blog and returns it with its author.
    ///
    /// # Returns
    /// - `Ok(Some(Blog))` - The stored blog after the update
    /// - `Ok(None)` - No blog with this ID
    pub async fn update(&self, id: Uuid, params: UpdateBlogParams) -> Result<Option<Blog>, DbErr> {
        let Some(existing) = entity::prelude::Blog::find_by_id(id)
            .filter(entity::blog::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut blog = existing.into_active_model();
        if let Some(title) = params.title {
            blog.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            blog.description = ActiveValue::Set(description);
        }
        if let Some(markdown_url) = params.markdown_url {
            blog.markdown_url = ActiveValue::Set(markdown_url);
        }
        if let Some(author_id) = params.author_id {
            blog.author_id = ActiveValue::Set(author_id);
        }
        blog.updated_at = ActiveValue::Set(Utc::now());

        let blog = blog.update(self.db).await?;

        self.get_by_id(blog.id).await
    }

    /// Permanently removes a blog.
    ///
    /// # Returns
    /// - `Ok(true)` - The row was removed
    /// - `Ok(false)` - No blog with this ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Blog::delete_many()
            .filter(entity::blog::Column::Id.eq(id))
            .filter(entity::blog::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Case-insensitive substring search over title and description.
    pub async fn search(&self, term: &str) -> Result<Vec<Blog>, DbErr> {
        let pattern = contains_pattern(term);

        let blogs = entity::prelude::Blog::find()
            .filter(entity::blog::Column::DeletedAt.is_null())
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::blog::Entity,
                            entity::blog::Column::Title,
                        ))))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::blog::Entity,
                            entity::blog::Column::Description,
                        ))))
                        .like(pattern),
                    ),
            )
            .find_also_related(entity::prelude::Member)
            .order_by_asc(entity::blog::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(blogs
            .into_iter()
            .map(|(blog, author)| Blog::from_entity(blog, author))
            .collect())
    }
}
