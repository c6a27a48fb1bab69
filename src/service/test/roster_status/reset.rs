use super::*;

/// Tests the between-cycles reset.
///
/// Expected: RSVP lists emptied, cancelled flag cleared, roster and
/// configuration retained
#[tokio::test]
async fn clears_lists_and_cancelled_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123")
        .cancelled(true)
        .build()
        .await?;
    factory::create_roster_member(db, 123, 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "cancellers", 1, "P1").await?;

    let service = RosterStatusService::new(db);
    service.reset(123).await?;

    assert_eq!(service.unanswered(123).await?, Unanswered::Everyone);

    let config = GuildConfigRepository::new(db).get(123).await?.unwrap();
    assert!(!config.cancelled);

    Ok(())
}

/// Tests that resetting one guild leaves another's state alone.
///
/// Expected: the second guild's attendee list survives
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 456, 2, "P2").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;
    factory::create_rsvp_entry(db, 456, "attendees", 2, "P2").await?;

    let service = RosterStatusService::new(db);
    service.reset(123).await?;

    assert!(service.is_full_group(456).await?);
    assert_eq!(
        service.unanswered(456).await?,
        Unanswered::Members(Vec::new())
    );

    Ok(())
}
