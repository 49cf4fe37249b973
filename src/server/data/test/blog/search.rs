use super::*;

/// Tests blog search over title and description with authors attached.
///
/// Expected: Ok with matching blogs only, each carrying its author
#[tokio::test]
async fn matches_title_or_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let by_title = factory::blog::BlogFactory::new(db, author.id)
        .title("Async in Practice")
        .description("Notes")
        .build()
        .await?;
    let by_description = factory::blog::BlogFactory::new(db, author.id)
        .title("Workshop recap")
        .description("We covered ASYNC runtimes")
        .build()
        .await?;
    factory::blog::BlogFactory::new(db, author.id)
        .title("Elections")
        .description("Results")
        .build()
        .await?;

    let repo = BlogRepository::new(db);
    let results = repo.search("async").await?;

    let ids: Vec<Uuid> = results.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![by_title.id, by_description.id]);
    assert!(results.iter().all(|b| b.author.is_some()));

    Ok(())
}
