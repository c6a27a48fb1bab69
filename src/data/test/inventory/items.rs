use super::*;

/// Tests reading an inventory that has never been written.
///
/// Expected: empty vec, not an error
#[tokio::test]
async fn returns_empty_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InventoryRepository::new(db);
    assert!(repo.items(123, "1").await?.is_empty());

    Ok(())
}

/// Tests that reads return only the named member's items, ordered by name.
///
/// Expected: two items in alphabetical order, other members excluded
#[tokio::test]
async fn lists_items_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_inventory_item(db, 123, 1, "rope", 2).await?;
    factory::create_inventory_item(db, 123, 1, "lantern", 1).await?;
    factory::create_inventory_item(db, 123, 2, "sword", 1).await?;

    let repo = InventoryRepository::new(db);
    let items = repo.items(123, "1").await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item, "lantern");
    assert_eq!(items[1].item, "rope");

    Ok(())
}
