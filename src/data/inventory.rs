use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::error::AppError;

/// Per-player item inventory storage.
///
/// Items are keyed by guild, member, and item name; each entry carries a
/// quantity. Adding an item that already exists leaves its quantity alone,
/// `set_qty` is the explicit way to change it.
pub struct InventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a member's inventory, ordered by item name. A member with no
    /// items yields an empty vec, never an error.
    pub async fn items(
        &self,
        guild_id: u64,
        member_id: &str,
    ) -> Result<Vec<entity::inventory_item::Model>, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::inventory_item::Column::MemberId.eq(member_id))
            .order_by_asc(entity::inventory_item::Column::Item)
            .all(self.db)
            .await
    }

    /// Adds an item to a member's inventory.
    ///
    /// # Returns
    /// - `Ok(true)`: Newly added
    /// - `Ok(false)`: The item is already held; its quantity is unchanged
    pub async fn add(
        &self,
        guild_id: u64,
        member_id: &str,
        item: &str,
        qty: i32,
    ) -> Result<bool, DbErr> {
        if self.find(guild_id, member_id, item).await?.is_some() {
            return Ok(false);
        }

        entity::inventory_item::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            member_id: ActiveValue::Set(member_id.to_string()),
            item: ActiveValue::Set(item.to_string()),
            qty: ActiveValue::Set(qty),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes an item from a member's inventory.
    ///
    /// # Returns
    /// - `Ok(true)`: The item was removed
    /// - `Ok(false)`: The member does not hold the item
    pub async fn remove(&self, guild_id: u64, member_id: &str, item: &str) -> Result<bool, DbErr> {
        let res = entity::prelude::InventoryItem::delete_many()
            .filter(entity::inventory_item::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::inventory_item::Column::MemberId.eq(member_id))
            .filter(entity::inventory_item::Column::Item.eq(item))
            .exec(self.db)
            .await?;

        Ok(res.rows_affected > 0)
    }

    /// Sets the quantity of an item the member already holds.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated entry
    /// - `Err(AppError::NotFound)`: The member does not hold the item
    pub async fn set_qty(
        &self,
        guild_id: u64,
        member_id: &str,
        item: &str,
        qty: i32,
    ) -> Result<entity::inventory_item::Model, AppError> {
        let Some(existing) = self.find(guild_id, member_id, item).await? else {
            return Err(AppError::NotFound(format!("No {item} in inventory")));
        };

        let mut active: entity::inventory_item::ActiveModel = existing.into();
        active.qty = ActiveValue::Set(qty);

        Ok(active.update(self.db).await?)
    }

    async fn find(
        &self,
        guild_id: u64,
        member_id: &str,
        item: &str,
    ) -> Result<Option<entity::inventory_item::Model>, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::inventory_item::Column::MemberId.eq(member_id))
            .filter(entity::inventory_item::Column::Item.eq(item))
            .one(self.db)
            .await
    }
}
