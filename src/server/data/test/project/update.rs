use super::*;

/// Tests replacing a project's markdown URL while keeping the rest.
///
/// Expected: Ok(Some) with only markdown_url changed
#[tokio::test]
async fn updates_markdown_url() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::project::ProjectFactory::new(db)
        .title("Weather station")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(
            project.id,
            UpdateProjectParams {
                markdown_url: Some("https://cdn.example/weather.md".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Weather station");
    assert_eq!(updated.markdown_url, "https://cdn.example/weather.md");

    Ok(())
}

/// Tests updating a project that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    assert!(repo
        .update(Uuid::new_v4(), UpdateProjectParams::default())
        .await?
        .is_none());

    Ok(())
}
