use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::{CreateMemberParams, Member, UpdateMemberParams},
    util::parse::parse_lookup_key,
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every live member, oldest first
    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a member by its lookup key
    ///
    /// Keys that are not UUIDs are reported as not found rather than as a bad request.
    pub async fn get_by_id(&self, id: &str) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        let member = match parse_lookup_key(id) {
            Some(id) => repo.get_by_id(id).await?,
            None => None,
        };

        member.ok_or_else(not_found)
    }

    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        let member = repo.create(params).await?;

        tracing::info!("Created member {}", member.id);

        Ok(member)
    }

    pub async fn update(&self, id: &str, params: UpdateMemberParams) -> Result<Member, AppError> {
        let Some(id) = parse_lookup_key(id) else {
            return Err(not_found());
        };

        let repo = MemberRepository::new(self.db);

        repo.update(id, params).await?.ok_or_else(not_found)
    }

    /// Soft-deletes a member
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let Some(id) = parse_lookup_key(id) else {
            return Err(not_found());
        };

        let repo = MemberRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Deleted member {}", id);

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Member not found".to_string())
}
