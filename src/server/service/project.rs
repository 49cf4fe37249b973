use sea_orm::DatabaseConnection;

use crate::server::{
    data::project::ProjectRepository,
    error::AppError,
    model::project::{CreateProjectParams, Project, UpdateProjectParams},
    util::parse::parse_lookup_key,
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Project>, AppError> {
        let repo = ProjectRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a project by its lookup key, treating malformed keys as not found
    pub async fn get_by_id(&self, id: &str) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.db);

        let project = match parse_lookup_key(id) {
            Some(id) => repo.get_by_id(id).await?,
            None => None,
        };

        project.ok_or_else(not_found)
    }

    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.db);

        let project = repo.create(params).await?;

        tracing::info!("Created project {}", project.id);

        Ok(project)
    }

    pub async fn update(
        &self,
        id: &str,
        params: UpdateProjectParams,
    ) -> Result<Project, AppError> {
        let Some(id) = parse_lookup_key(id) else {
            return Err(not_found());
        };

        let repo = ProjectRepository::new(self.db);

        repo.update(id, params).await?.ok_or_else(not_found)
    }

    /// Soft-deletes a project
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let Some(id) = parse_lookup_key(id) else {
            return Err(not_found());
        };

        let repo = ProjectRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Deleted project {}", id);

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Project not found".to_string())
}
