//! Inventory item factory for creating test inventory rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an inventory entry for the given guild member.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the entry belongs to
/// - `member_id` - Discord user ID of the holder
/// - `item` - Item name
/// - `qty` - Stack size
pub async fn create_inventory_item(
    db: &DatabaseConnection,
    guild_id: u64,
    member_id: u64,
    item: &str,
    qty: i32,
) -> Result<entity::inventory_item::Model, DbErr> {
    entity::inventory_item::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        member_id: ActiveValue::Set(member_id.to_string()),
        item: ActiveValue::Set(item.to_string()),
        qty: ActiveValue::Set(qty),
        ..Default::default()
    }
    .insert(db)
    .await
}
