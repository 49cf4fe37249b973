use super::*;

/// Tests updating a subset of member fields.
///
/// Verifies that omitted fields keep their stored values and that updated_at moves
/// forward while created_at stays put.
///
/// Expected: Ok(Some) with only the provided fields changed
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .name("Old Name")
        .position("Secretary")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let updated = repo
        .update(
            member.id,
            UpdateMemberParams {
                name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, member.id);
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.position, "Secretary");
    assert_eq!(updated.created_at, member.created_at);
    assert!(updated.updated_at >= member.updated_at);

    Ok(())
}

/// Tests updating a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let result = repo
        .update(Uuid::new_v4(), UpdateMemberParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a soft-deleted member cannot be updated.
///
/// Expected: Ok(None) and the stored row unchanged
#[tokio::test]
async fn ignores_soft_deleted_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .name("Gone")
        .deleted(true)
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let result = repo
        .update(
            member.id,
            UpdateMemberParams {
                name: Some("Back".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    let stored = repo.get_by_id_with_deleted(member.id).await?.unwrap();
    assert_eq!(stored.name, "Gone");

    Ok(())
}
