use sea_orm::DatabaseConnection;

use crate::server::{
    data::{blog::BlogRepository, member::MemberRepository, project::ProjectRepository},
    error::AppError,
    model::search::SearchResults,
};

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches members, projects and blogs for a keyword
    ///
    /// Each repository is searched independently; there is no ranking across entity types.
    ///
    /// # Arguments
    /// - `query` - The `q` query parameter, if present
    ///
    /// # Returns
    /// - `Ok(SearchResults)` - Matches per entity type, possibly all empty
    /// - `Err(AppError::BadRequest)` - The query is missing or empty
    pub async fn search(&self, query: Option<&str>) -> Result<SearchResults, AppError> {
        let term = match query {
            Some(term) if !term.is_empty() => term,
            _ => return Err(AppError::BadRequest("Search query is required".to_string())),
        };

        let members = MemberRepository::new(self.db).search(term).await?;
        let projects = ProjectRepository::new(self.db).search(term).await?;
        let blogs = BlogRepository::new(self.db).search(term).await?;

        tracing::debug!(
            "Search for {:?} matched {} members, {} projects, {} blogs",
            term,
            members.len(),
            projects.len(),
            blogs.len()
        );

        Ok(SearchResults {
            members,
            projects,
            blogs,
        })
    }
}
