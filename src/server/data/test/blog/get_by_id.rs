use super::*;

/// Tests fetching a blog together with its author.
///
/// Expected: Ok(Some) with the author populated
#[tokio::test]
async fn loads_author_with_blog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, blog) = factory::helpers::create_blog_with_author(db).await?;

    let repo = BlogRepository::new(db);
    let found = repo.get_by_id(blog.id).await?.unwrap();

    assert_eq!(found.id, blog.id);
    assert_eq!(found.author.map(|a| a.id), Some(member.id));

    Ok(())
}

/// Tests that a soft-deleted author is reported as absent.
///
/// Expected: Ok(Some) blog with author None but author_id intact
#[tokio::test]
async fn omits_soft_deleted_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .deleted(true)
        .build()
        .await?;
    let blog = factory::create_blog(db, member.id).await?;

    let repo = BlogRepository::new(db);
    let found = repo.get_by_id(blog.id).await?.unwrap();

    assert_eq!(found.author_id, member.id);
    assert!(found.author.is_none());

    Ok(())
}

/// Tests fetching an unknown blog.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_blog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlogRepository::new(db);

    assert!(repo.get_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
