//! RSVP entry factory for creating test list memberships.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an RSVP list entry for the given guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the entry belongs to
/// - `list` - List name ("attendees", "decliners", "dreamers", "cancellers")
/// - `member_id` - Discord user ID of the member
/// - `name` - Display name of the member
pub async fn create_rsvp_entry(
    db: &DatabaseConnection,
    guild_id: u64,
    list: &str,
    member_id: u64,
    name: &str,
) -> Result<entity::rsvp_entry::Model, DbErr> {
    entity::rsvp_entry::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        list: ActiveValue::Set(list.to_string()),
        member_id: ActiveValue::Set(member_id.to_string()),
        member_name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
