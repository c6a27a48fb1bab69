use super::*;

/// Tests deleting a guild's configuration.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db, 123).await?;

    let repo = GuildConfigRepository::new(db);
    assert!(repo.delete(123).await?);

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests deleting for a guild without a configuration.
///
/// Expected: Ok(false), other guilds untouched
#[tokio::test]
async fn returns_false_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db, 456).await?;

    let repo = GuildConfigRepository::new(db);
    assert!(!repo.delete(123).await?);

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
