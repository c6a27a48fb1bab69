use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::{Member, RsvpList};

/// Per-guild RSVP list storage.
///
/// Each operation is scoped to one guild and one named list; lists behave as
/// sets keyed by member ID. Mutual exclusion between attendees and decliners
/// is enforced by the RSVP service, not here.
pub struct RsvpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RsvpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a member to a list.
    ///
    /// # Returns
    /// - `Ok(true)`: Newly added
    /// - `Ok(false)`: Already on the list (set semantics, no duplicates)
    pub async fn add(
        &self,
        guild_id: u64,
        list: RsvpList,
        member: &Member,
    ) -> Result<bool, DbErr> {
        let existing = entity::prelude::RsvpEntry::find()
            .filter(entity::rsvp_entry::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::rsvp_entry::Column::List.eq(list.as_str()))
            .filter(entity::rsvp_entry::Column::MemberId.eq(member.id.as_str()))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::rsvp_entry::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            list: ActiveValue::Set(list.as_str().to_string()),
            member_id: ActiveValue::Set(member.id.clone()),
            member_name: ActiveValue::Set(member.name.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a member from a list.
    ///
    /// # Returns
    /// - `Ok(true)`: A member was removed
    /// - `Ok(false)`: The member was not on the list
    pub async fn remove(
        &self,
        guild_id: u64,
        list: RsvpList,
        member_id: &str,
    ) -> Result<bool, DbErr> {
        let res = entity::prelude::RsvpEntry::delete_many()
            .filter(entity::rsvp_entry::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::rsvp_entry::Column::List.eq(list.as_str()))
            .filter(entity::rsvp_entry::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(res.rows_affected > 0)
    }

    /// Gets the members of a list. An absent list yields an empty vec, never
    /// an error.
    pub async fn members(&self, guild_id: u64, list: RsvpList) -> Result<Vec<Member>, DbErr> {
        let rows = entity::prelude::RsvpEntry::find()
            .filter(entity::rsvp_entry::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::rsvp_entry::Column::List.eq(list.as_str()))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Member::new(row.member_id, row.member_name))
            .collect())
    }

    /// Deletes every RSVP entry for exactly this guild, across all lists.
    ///
    /// # Returns
    /// - `Ok(true)`: At least one entry was deleted
    /// - `Ok(false)`: The guild had no RSVP state
    pub async fn clear_all(&self, guild_id: u64) -> Result<bool, DbErr> {
        let res = entity::prelude::RsvpEntry::delete_many()
            .filter(entity::rsvp_entry::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(res.rows_affected > 0)
    }
}
