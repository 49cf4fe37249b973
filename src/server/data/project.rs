//! Project data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::contains_pattern,
    model::project::{CreateProjectParams, Project, UpdateProjectParams},
};

/// Repository providing database operations for club projects.
pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Project>, DbErr> {
        let projects = entity::prelude::Project::find()
            .filter(entity::project::Column::DeletedAt.is_null())
            .order_by_asc(entity::project::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(projects.into_iter().map(Project::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Project>, DbErr> {
        let project = entity::prelude::Project::find_by_id(id)
            .filter(entity::project::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(project.map(Project::from_entity))
    }

    /// Finds a project by ID including soft-deleted rows.
    pub async fn get_by_id_with_deleted(&self, id: Uuid) -> Result<Option<Project>, DbErr> {
        let project = entity::prelude::Project::find_by_id(id).one(self.db).await?;

        Ok(project.map(Project::from_entity))
    }

    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, DbErr> {
        let now = Utc::now();

        let project = entity::project::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            markdown_url: ActiveValue::Set(params.markdown_url),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(project))
    }

    /// Overlays the provided fields onto an existing project.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - The stored project after the update
    /// - `Ok(None)` - No live project with this ID
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateProjectParams,
    ) -> Result<Option<Project>, DbErr> {
        let Some(existing) = entity::prelude::Project::find_by_id(id)
            .filter(entity::project::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut project = existing.into_active_model();
        if let Some(title) = params.title {
            project.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            project.description = ActiveValue::Set(description);
        }
        if let Some(markdown_url) = params.markdown_url {
            project.markdown_url = ActiveValue::Set(markdown_url);
        }
        if let Some(image_url) = params.image_url {
            project.image_url = ActiveValue::Set(image_url);
        }
        project.updated_at = ActiveValue::Set(Utc::now());

        let project = project.update(self.db).await?;

        Ok(Some(Project::from_entity(project)))
    }

    /// Soft-deletes a project by stamping `deleted_at`.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Project::update_many()
            .col_expr(entity::project::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::project::Column::Id.eq(id))
            .filter(entity::project::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Case-insensitive substring search over title and description.
    pub async fn search(&self, term: &str) -> Result<Vec<Project>, DbErr> {
        let pattern = contains_pattern(term);

        let projects = entity::prelude::Project::find()
            .filter(entity::project::Column::DeletedAt.is_null())
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::project::Entity,
                            entity::project::Column::Title,
                        ))))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::project::Entity,
                            entity::project::Column::Description,
                        ))))
                        .like(pattern),
                    ),
            )
            .order_by_asc(entity::project::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(projects.into_iter().map(Project::from_entity).collect())
    }
}
