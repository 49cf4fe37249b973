use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(pk_uuid(Blog::Id))
                    .col(string_len(Blog::Title, 255))
                    .col(text(Blog::Description))
                    .col(text(Blog::MarkdownUrl).default(""))
                    .col(uuid(Blog::AuthorId))
                    .col(
                        timestamp_with_time_zone(Blog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Blog::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Blog::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_author_id")
                            .from(Blog::Table, Blog::AuthorId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_deleted_at")
                    .table(Blog::Table)
                    .col(Blog::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blog {
    Table,
    Id,
    Title,
    Description,
    MarkdownUrl,
    AuthorId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
