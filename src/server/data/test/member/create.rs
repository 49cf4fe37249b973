use super::*;

/// Tests creating a member with every field provided.
///
/// Verifies that the repository generates a fresh ID and stamps both timestamps
/// with the same instant.
///
/// Expected: Ok with the stored member returned
#[tokio::test]
async fn creates_member_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            name: "Ada Lovelace".to_string(),
            position: "President".to_string(),
            image_url: "https://cdn.example/ada.png".to_string(),
            joined_at: None,
        })
        .await?;

    assert_eq!(member.name, "Ada Lovelace");
    assert_eq!(member.position, "President");
    assert_eq!(member.image_url, "https://cdn.example/ada.png");
    assert_eq!(member.created_at, member.updated_at);
    assert!(member.deleted_at.is_none());

    let stored = repo.get_by_id(member.id).await?;
    assert_eq!(stored.map(|m| m.name), Some("Ada Lovelace".to_string()));

    Ok(())
}

/// Tests that a supplied join date is kept.
///
/// Expected: Ok with joined_at equal to the provided value
#[tokio::test]
async fn keeps_provided_joined_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let joined_at = chrono::Utc::now() - chrono::Duration::days(365);

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            name: "Grace".to_string(),
            position: "Treasurer".to_string(),
            image_url: String::new(),
            joined_at: Some(joined_at),
        })
        .await?;

    assert_eq!(member.joined_at, joined_at);

    Ok(())
}

/// Tests that two creates never share an ID.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn generates_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let params = CreateMemberParams {
        name: "Twin".to_string(),
        position: "Member".to_string(),
        image_url: String::new(),
        joined_at: None,
    };
    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
