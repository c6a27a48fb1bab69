use super::*;

/// Tests the unanswered set when some members have responded.
///
/// Expected: only the silent member is listed
#[tokio::test]
async fn lists_only_silent_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 123, 1, "P1").await?;
    factory::create_roster_member(db, 123, 2, "P2").await?;
    factory::create_roster_member(db, 123, 3, "P3").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "decliners", 2, "P2").await?;

    let service = RosterStatusService::new(db);
    assert_eq!(
        service.unanswered(123).await?,
        Unanswered::Members(vec![Member::new("3", "P3")])
    );

    Ok(())
}

/// Tests the sentinel used when nobody has responded.
///
/// Expected: Unanswered::Everyone, not the member list
#[tokio::test]
async fn all_silent_collapses_to_everyone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 123, 1, "P1").await?;
    factory::create_roster_member(db, 123, 2, "P2").await?;

    let service = RosterStatusService::new(db);
    assert_eq!(service.unanswered(123).await?, Unanswered::Everyone);

    Ok(())
}

/// Tests that an empty roster never produces the everyone sentinel.
///
/// Expected: an empty member list
#[tokio::test]
async fn empty_roster_yields_empty_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RosterStatusService::new(db);
    assert_eq!(
        service.unanswered(123).await?,
        Unanswered::Members(Vec::new())
    );

    Ok(())
}

/// Tests that an alternate-plan vote alone does not count as an answer.
///
/// Expected: a dream voter with no accept or decline is still unanswered
#[tokio::test]
async fn dream_votes_do_not_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 123, 1, "P1").await?;
    factory::create_roster_member(db, 123, 2, "P2").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "dreamers", 2, "P2").await?;

    let service = RosterStatusService::new(db);
    assert_eq!(
        service.unanswered(123).await?,
        Unanswered::Members(vec![Member::new("2", "P2")])
    );

    Ok(())
}
