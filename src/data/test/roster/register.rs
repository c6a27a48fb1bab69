use super::*;

/// Tests adding a new member to the roster.
///
/// Expected: Ok(true) and the member is listed
#[tokio::test]
async fn registers_new_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RosterMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RosterRepository::new(db);
    let added = repo.register(123, &Member::from_user(1, "P1")).await?;

    assert!(added);
    assert_eq!(repo.members(123).await?, vec![Member::new("1", "P1")]);

    Ok(())
}

/// Tests registering the same member twice.
///
/// Expected: second call returns false, roster size unchanged
#[tokio::test]
async fn ignores_duplicate_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RosterMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RosterRepository::new(db);
    let member = Member::from_user(1, "P1");

    assert!(repo.register(123, &member).await?);
    assert!(!repo.register(123, &member).await?);
    assert_eq!(repo.members(123).await?.len(), 1);

    Ok(())
}

/// Tests that rosters are isolated per guild.
///
/// Expected: the same member can sit on two guilds' rosters independently
#[tokio::test]
async fn isolates_rosters_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RosterMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RosterRepository::new(db);
    let member = Member::from_user(1, "P1");

    assert!(repo.register(123, &member).await?);
    assert!(repo.register(456, &member).await?);

    assert_eq!(repo.members(123).await?.len(), 1);
    assert_eq!(repo.members(456).await?.len(), 1);

    Ok(())
}
