use super::*;

/// Tests removing a roster member.
///
/// Expected: Ok(true) and the roster no longer lists the member
#[tokio::test]
async fn removes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RosterMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 123, 1, "P1").await?;

    let repo = RosterRepository::new(db);
    assert!(repo.unregister(123, "1").await?);
    assert!(repo.members(123).await?.is_empty());

    Ok(())
}

/// Tests removing a member who was never registered.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RosterMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RosterRepository::new(db);
    assert!(!repo.unregister(123, "1").await?);

    Ok(())
}

/// Tests that removal only affects the named guild's roster.
///
/// Expected: the other guild keeps its entry
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RosterMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 123, 1, "P1").await?;
    factory::create_roster_member(db, 456, 1, "P1").await?;

    let repo = RosterRepository::new(db);
    assert!(repo.unregister(123, "1").await?);
    assert_eq!(repo.members(456).await?.len(), 1);

    Ok(())
}
