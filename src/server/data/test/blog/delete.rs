use super::*;

/// Tests that deleting a blog removes the row entirely.
///
/// Expected: Ok(true) and the blog missing even when including removed rows
#[tokio::test]
async fn hard_deletes_blog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, blog) = factory::helpers::create_blog_with_author(db).await?;

    let repo = BlogRepository::new(db);
    assert!(repo.delete(blog.id).await?);

    assert!(repo.get_by_id(blog.id).await?.is_none());
    assert!(repo.get_by_id_with_deleted(blog.id).await?.is_none());

    // The author is untouched.
    let author = crate::server::data::member::MemberRepository::new(db)
        .get_by_id(member.id)
        .await?;
    assert!(author.is_some());

    Ok(())
}

/// Tests deleting an unknown blog.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_blog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlogRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
