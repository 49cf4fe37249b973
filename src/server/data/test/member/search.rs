use super::*;

/// Tests that search matches name and position case-insensitively.
///
/// Expected: Ok with both matching members and without the unrelated one
#[tokio::test]
async fn matches_name_or_position_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_name = factory::member::MemberFactory::new(db)
        .name("Rustacean Rita")
        .position("Member")
        .build()
        .await?;
    let by_position = factory::member::MemberFactory::new(db)
        .name("Sam")
        .position("Head of RUST guild")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .name("Pat")
        .position("Treasurer")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let ids: Vec<Uuid> = repo.search("rust").await?.into_iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![by_name.id, by_position.id]);

    Ok(())
}

/// Tests that soft-deleted members never show up in results.
///
/// Expected: Ok with empty results
#[tokio::test]
async fn excludes_soft_deleted_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .name("Hidden Match")
        .deleted(true)
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert!(repo.search("hidden").await?.is_empty());

    Ok(())
}
