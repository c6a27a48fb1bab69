//! Roster member factory for creating test roster rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a roster member for the given guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the member belongs to
/// - `member_id` - Discord user ID of the member
/// - `name` - Display name of the member
pub async fn create_roster_member(
    db: &DatabaseConnection,
    guild_id: u64,
    member_id: u64,
    name: &str,
) -> Result<entity::roster_member::Model, DbErr> {
    entity::roster_member::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        member_id: ActiveValue::Set(member_id.to_string()),
        member_name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
