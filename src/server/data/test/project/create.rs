use super::*;

/// Tests creating a project.
///
/// Expected: Ok with the stored project returned and retrievable by ID
#[tokio::test]
async fn creates_project_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(CreateProjectParams {
            title: "Line follower".to_string(),
            description: "A small robot".to_string(),
            markdown_url: "https://cdn.example/robot.md".to_string(),
            image_url: String::new(),
        })
        .await?;

    let stored = repo.get_by_id(project.id).await?.unwrap();
    assert_eq!(stored, project);
    assert_eq!(stored.title, "Line follower");

    Ok(())
}
