use super::*;

/// Tests soft-deleting a member.
///
/// Verifies the row stays in the table with deleted_at set and disappears from the
/// default reads.
///
/// Expected: Ok(true), row retained with deleted_at set
#[tokio::test]
async fn soft_deletes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    assert!(repo.delete(member.id).await?);

    assert!(repo.get_by_id(member.id).await?.is_none());
    assert!(repo.get_all().await?.is_empty());
    let stored = repo.get_by_id_with_deleted(member.id).await?.unwrap();
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Tests deleting the same member twice.
///
/// Expected: second delete returns Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    assert!(repo.delete(member.id).await?);
    assert!(!repo.delete(member.id).await?);

    Ok(())
}

/// Tests deleting an unknown member.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
