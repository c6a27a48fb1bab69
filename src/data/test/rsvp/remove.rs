use super::*;

/// Tests removing a member from a list.
///
/// Expected: Ok(true) and the list no longer holds the member
#[tokio::test]
async fn removes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RsvpEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;

    let repo = RsvpRepository::new(db);
    assert!(repo.remove(123, RsvpList::Attendees, "1").await?);
    assert!(repo.members(123, RsvpList::Attendees).await?.is_empty());

    Ok(())
}

/// Tests removal of a member who is not on the list.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_absent_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RsvpEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RsvpRepository::new(db);
    assert!(!repo.remove(123, RsvpList::Attendees, "1").await?);

    Ok(())
}

/// Tests that removal targets only the named list.
///
/// Expected: the member's entries on other lists survive
#[tokio::test]
async fn leaves_other_lists_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RsvpEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rsvp_entry(db, 123, "attendees", 1, "P1").await?;
    factory::create_rsvp_entry(db, 123, "dreamers", 1, "P1").await?;

    let repo = RsvpRepository::new(db);
    assert!(repo.remove(123, RsvpList::Attendees, "1").await?);
    assert_eq!(repo.members(123, RsvpList::Dreamers).await?.len(), 1);

    Ok(())
}
