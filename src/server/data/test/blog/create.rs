use super::*;

/// Tests creating a blog for an existing author.
///
/// Expected: Ok with the author loaded alongside the blog
#[tokio::test]
async fn creates_blog_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::member::MemberFactory::new(db)
        .name("Author")
        .build()
        .await?;

    let repo = BlogRepository::new(db);
    let blog = repo
        .create(CreateBlogParams {
            title: "Hello".to_string(),
            description: "First post".to_string(),
            markdown_url: "https://cdn.example/hello.md".to_string(),
            author_id: author.id,
        })
        .await?;

    assert_eq!(blog.title, "Hello");
    assert_eq!(blog.author_id, author.id);
    assert_eq!(blog.author.map(|a| a.name), Some("Author".to_string()));

    Ok(())
}

/// Tests creating a blog whose author does not exist.
///
/// Expected: Err carrying a foreign key violation
#[tokio::test]
async fn rejects_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlogRepository::new(db);
    let result = repo
        .create(CreateBlogParams {
            title: "Orphan".to_string(),
            description: String::new(),
            markdown_url: String::new(),
            author_id: Uuid::new_v4(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
