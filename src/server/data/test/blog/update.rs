use super::*;

/// Tests moving a blog to a different author.
///
/// Expected: Ok(Some) with the new author loaded
#[tokio::test]
async fn reassigns_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, blog) = factory::helpers::create_blog_with_author(db).await?;
    let new_author = factory::member::MemberFactory::new(db)
        .name("New Author")
        .build()
        .await?;

    let repo = BlogRepository::new(db);
    let updated = repo
        .update(
            blog.id,
            UpdateBlogParams {
                author_id: Some(new_author.id),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.author_id, new_author.id);
    assert_eq!(updated.author.map(|a| a.name), Some("New Author".to_string()));
    assert_eq!(updated.title, blog.title);

    Ok(())
}

/// Tests updating a blog that does not exist.
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
    let result = repo
        .update(
            Uuid::new_v4(),
            UpdateBlogParams {
                title: Some("Nope".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
