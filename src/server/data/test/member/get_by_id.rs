use super::*;

/// Tests fetching an existing member.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .name("Linus")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let found = repo.get_by_id(member.id).await?.unwrap();

    assert_eq!(found.id, member.id);
    assert_eq!(found.name, "Linus");

    Ok(())
}

/// Tests fetching an ID that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);

    assert!(repo.get_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}

/// Tests that a soft-deleted member is hidden from the default lookup only.
///
/// Expected: get_by_id is None, get_by_id_with_deleted returns the row with deleted_at set
#[tokio::test]
async fn hides_soft_deleted_member() -> Result<(), DbErr> {
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

    let repo = MemberRepository::new(db);

    assert!(repo.get_by_id(member.id).await?.is_none());
    let with_deleted = repo.get_by_id_with_deleted(member.id).await?.unwrap();
    assert!(with_deleted.deleted_at.is_some());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests that listing returns members oldest first.
///
/// Expected: Ok with members in creation order
#[tokio::test]
async fn lists_members_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;
    let third = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let ids: Vec<Uuid> = repo.get_all().await?.into_iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
