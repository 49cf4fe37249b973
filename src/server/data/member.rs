//! Member data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::contains_pattern,
    model::member::{CreateMemberParams, Member, UpdateMemberParams},
};

/// Repository providing database operations for club members.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all members that have not been soft-deleted, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        let members = entity::prelude::Member::find()
            .filter(entity::member::Column::DeletedAt.is_null())
            .order_by_asc(entity::member::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(Member::from_entity).collect())
    }

    /// Finds a member by ID, ignoring soft-deleted rows.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Member>, DbErr> {
        let member = entity::prelude::Member::find_by_id(id)
            .filter(entity::member::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(member.map(Member::from_entity))
    }

    /// Finds a member by ID including soft-deleted rows.
    pub async fn get_by_id_with_deleted(&self, id: Uuid) -> Result<Option<Member>, DbErr> {
        let member = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(member.map(Member::from_entity))
    }

    /// Inserts a new member under a freshly generated ID.
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, DbErr> {
        let now = Utc::now();

        let member = entity::member::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            position: ActiveValue::Set(params.position),
            image_url: ActiveValue::Set(params.image_url),
            joined_at: ActiveValue::Set(params.joined_at.unwrap_or(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(member))
    }

    /// Overlays the provided fields onto an existing member.
    ///
    /// Load and save are separate statements, so two concurrent updates of the same
    /// member resolve as last-write-wins.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The stored member after the update
    /// - `Ok(None)` - No live member with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateMemberParams,
    ) -> Result<Option<Member>, DbErr> {
        let Some(existing) = entity::prelude::Member::find_by_id(id)
            .filter(entity::member::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut member = existing.into_active_model();
        if let Some(name) = params.name {
            member.name = ActiveValue::Set(name);
        }
        if let Some(position) = params.position {
            member.position = ActiveValue::Set(position);
        }
        if let Some(image_url) = params.image_url {
            member.image_url = ActiveValue::Set(image_url);
        }
        if let Some(joined_at) = params.joined_at {
            member.joined_at = ActiveValue::Set(joined_at);
        }
        member.updated_at = ActiveValue::Set(Utc::now());

        let member = member.update(self.db).await?;

        Ok(Some(Member::from_entity(member)))
    }

    /// Soft-deletes a member by stamping `deleted_at`.
    ///
    /// # Returns
    /// - `Ok(true)` - The member was live and is now hidden
    /// - `Ok(false)` - No live member with this ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(entity::member::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::member::Column::Id.eq(id))
            .filter(entity::member::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Case-insensitive substring search over name and position.
    pub async fn search(&self, term: &str) -> Result<Vec<Member>, DbErr> {
        let pattern = contains_pattern(term);

        let members = entity::prelude::Member::find()
            .filter(entity::member::Column::DeletedAt.is_null())
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::member::Entity,
                            entity::member::Column::Name,
                        ))))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::member::Entity,
                            entity::member::Column::Position,
                        ))))
                        .like(pattern),
                    ),
            )
            .order_by_asc(entity::member::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(Member::from_entity).collect())
    }
}
