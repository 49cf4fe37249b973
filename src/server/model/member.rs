//! Member domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::member::{CreateMemberDto, MemberDto, UpdateMemberDto};

/// A club member as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub image_url: String,
    pub joined_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; only visible through the include-removed lookup.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            position: entity.position,
            image_url: entity.image_url,
            joined_at: entity.joined_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            name: self.name,
            position: self.position,
            image_url: self.image_url,
            joined_at: self.joined_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub name: String,
    pub position: String,
    pub image_url: String,
    pub joined_at: Option<DateTime<Utc>>,
}

impl CreateMemberParams {
    pub fn from_dto(dto: CreateMemberDto) -> Self {
        Self {
            name: dto.name,
            position: dto.position,
            image_url: dto.image_url,
            joined_at: dto.joined_at,
        }
    }
}

/// Fields to overlay onto an existing member; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberParams {
    pub name: Option<String>,
    pub position: Option<String>,
    pub image_url: Option<String>,
    pub joined_at: Option<DateTime<Utc>>,
}

impl UpdateMemberParams {
    pub fn from_dto(dto: UpdateMemberDto) -> Self {
        Self {
            name: dto.name,
            position: dto.position,
            image_url: dto.image_url,
            joined_at: dto.joined_at,
        }
    }
}
