use super::*;

/// Tests the complete-roster check when every member has accepted.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_full_when_all_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 123, 1, "P1").await?;
    factory::create_roster_member(db, 123, 2, "P2").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 2, "P2").await?;

    let service = RosterStatusService::new(db);
    assert!(service.is_full_group(123).await?);

    Ok(())
}

/// Tests the complete-roster check with one member unanswered.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_incomplete_when_someone_silent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 123, 1, "P1").await?;
    factory::create_roster_member(db, 123, 2, "P2").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;

    let service = RosterStatusService::new(db);
    assert!(!service.is_full_group(123).await?);

    Ok(())
}

/// Tests that declines do not count towards a full group.
///
/// Expected: Ok(false) when a roster member is on the decline list
#[tokio::test]
async fn declines_do_not_complete_the_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 123, 1, "P1").await?;
    factory::create_roster_member(db, 123, 2, "P2").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "decliners", 2, "P2").await?;

    let service = RosterStatusService::new(db);
    assert!(!service.is_full_group(123).await?);

    Ok(())
}

/// Tests that non-roster attendees are ignored by the subset check.
///
/// Expected: Ok(true) even with a guest on the attendee list
#[tokio::test]
async fn ignores_attendees_outside_the_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_roster_member(db, 123, 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "attendees", 99, "Guest").await?;

    let service = RosterStatusService::new(db);
    assert!(service.is_full_group(123).await?);

    Ok(())
}

/// Tests the vacuous case of a guild with no roster at all.
///
/// Expected: Ok(true)
#[tokio::test]
async fn empty_roster_counts_as_full() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RosterStatusService::new(db);
    assert!(service.is_full_group(123).await?);

    Ok(())
}
