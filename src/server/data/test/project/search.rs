use super::*;

/// Tests that search looks at both title and description.
///
/// Expected: Ok with the two matching projects
#[tokio::test]
async fn matches_title_or_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_title = factory::project::ProjectFactory::new(db)
        .title("Drone Swarm")
        .description("Flying things")
        .build()
        .await?;
    let by_description = factory::project::ProjectFactory::new(db)
        .title("Hangar")
        .description("Storage for every drone we own")
        .build()
        .await?;
    factory::project::ProjectFactory::new(db)
        .title("Website")
        .description("This site")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let ids: Vec<Uuid> = repo.search("DRONE").await?.into_iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![by_title.id, by_description.id]);

    Ok(())
}

/// Tests a term that matches nothing.
///
/// Expected: Ok with empty results
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);

    assert!(repo.search("zzz-no-such-project").await?.is_empty());

    Ok(())
}
