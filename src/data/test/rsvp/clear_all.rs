use super::*;

/// Tests wiping every list for one guild.
///
/// Expected: all of the guild's lists empty, other guilds untouched
#[tokio::test]
async fn clears_exactly_one_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RsvpEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "decliners", 2, "P2").await?;
    factory::create_rsvp_entry(db, 123, "dreamers", 3, "P3").await?;
    factory::create_rsvp_entry(db, 456, "attendees", 1, "P1").await?;

    let repo = RsvpRepository::new(db);
    assert!(repo.clear_all(123).await?);

    let remaining = entity::prelude::RsvpEntry::find()
        .filter(entity::rsvp_entry::Column::GuildId.eq("123"))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    assert_eq!(repo.members(456, RsvpList::Attendees).await?.len(), 1);

    Ok(())
}

/// Tests clearing a guild that has no RSVP state.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_nothing_stored() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RsvpEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RsvpRepository::new(db);
    assert!(!repo.clear_all(123).await?);

    Ok(())
}
