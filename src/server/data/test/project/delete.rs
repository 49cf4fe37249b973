use super::*;

/// Tests soft-deleting a project.
///
/// Expected: Ok(true), hidden from default reads, still found including removed rows
#[tokio::test]
async fn soft_deletes_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let kept = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    assert!(repo.delete(project.id).await?);

    assert!(repo.get_by_id(project.id).await?.is_none());
    assert!(repo
        .get_by_id_with_deleted(project.id)
        .await?
        .unwrap()
        .deleted_at
        .is_some());

    let remaining: Vec<Uuid> = repo.get_all().await?.into_iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec![kept.id]);

    Ok(())
}
