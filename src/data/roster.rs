use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::Member;

pub struct RosterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a member to the guild's roster.
    ///
    /// Set semantics: a member already on the roster is not duplicated.
    ///
    /// # Returns
    /// - `Ok(true)`: Newly added
    /// - `Ok(false)`: Already on the roster
    pub async fn register(&self, guild_id: u64, member: &Member) -> Result<bool, DbErr> {
        if self.is_registered(guild_id, &member.id).await? {
            return Ok(false);
        }

        entity::roster_member::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            member_id: ActiveValue::Set(member.id.clone()),
            member_name: ActiveValue::Set(member.name.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a member from the guild's roster.
    ///
    /// # Returns
    /// - `Ok(true)`: A member was removed
    /// - `Ok(false)`: The member was not on the roster
    pub async fn unregister(&self, guild_id: u64, member_id: &str) -> Result<bool, DbErr> {
        let res = entity::prelude::RosterMember::delete_many()
            .filter(entity::roster_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::roster_member::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(res.rows_affected > 0)
    }

    /// Gets the guild's roster. A guild with no roster yields an empty vec,
    /// never an error.
    pub async fn members(&self, guild_id: u64) -> Result<Vec<Member>, DbErr> {
        let rows = entity::prelude::RosterMember::find()
            .filter(entity::roster_member::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Member::new(row.member_id, row.member_name))
            .collect())
    }

    /// Checks whether a member is on the guild's roster.
    pub async fn is_registered(&self, guild_id: u64, member_id: &str) -> Result<bool, DbErr> {
        let existing = entity::prelude::RosterMember::find()
            .filter(entity::roster_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::roster_member::Column::MemberId.eq(member_id))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }
}
