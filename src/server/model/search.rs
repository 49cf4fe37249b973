use crate::{
    model::search::SearchResultsDto,
    server::model::{blog::Blog, member::Member, project::Project},
};

/// Matches from each repository; any list may be empty.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub members: Vec<Member>,
    pub projects: Vec<Project>,
    pub blogs: Vec<Blog>,
}

impl SearchResults {
    pub fn into_dto(self) -> SearchResultsDto {
        SearchResultsDto {
            members: self.members.into_iter().map(Member::into_dto).collect(),
            projects: self.projects.into_iter().map(Project::into_dto).collect(),
            blogs: self.blogs.into_iter().map(Blog::into_dto).collect(),
        }
    }
}
