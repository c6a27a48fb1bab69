use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::{GuildConfigRepository, RsvpRepository},
    model::{Member, RsvpList},
};

/// RSVP mutation protocol.
///
/// Accept and decline are exclusive at this level: recording one answer
/// removes the member from the opposite list. Storage itself does not enforce
/// the exclusion.
pub struct RsvpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RsvpService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that a member will attend, withdrawing any earlier decline.
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)`: The attendee list after the mutation
    pub async fn accept(&self, guild_id: u64, member: &Member) -> Result<Vec<Member>, DbErr> {
        let repo = RsvpRepository::new(self.db);

        repo.add(guild_id, RsvpList::Attendees, member).await?;
        repo.remove(guild_id, RsvpList::Decliners, &member.id).await?;

        repo.members(guild_id, RsvpList::Attendees).await
    }

    /// Records that a member will not attend, withdrawing any earlier accept.
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)`: The decliner list after the mutation
    pub async fn decline(&self, guild_id: u64, member: &Member) -> Result<Vec<Member>, DbErr> {
        let repo = RsvpRepository::new(self.db);

        repo.add(guild_id, RsvpList::Decliners, member).await?;
        repo.remove(guild_id, RsvpList::Attendees, &member.id).await?;

        repo.members(guild_id, RsvpList::Decliners).await
    }

    /// Records an auxiliary vote (alternate-plan or cancel).
    ///
    /// A cancel vote also raises the guild's session-cancelled flag. Callers
    /// pass one of the vote lists; accept/decline go through their dedicated
    /// operations.
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)`: The vote list after the mutation
    pub async fn vote(
        &self,
        guild_id: u64,
        list: RsvpList,
        member: &Member,
    ) -> Result<Vec<Member>, DbErr> {
        let repo = RsvpRepository::new(self.db);

        repo.add(guild_id, list, member).await?;

        if list == RsvpList::Cancellers {
            GuildConfigRepository::new(self.db)
                .set_cancelled(guild_id, true)
                .await?;
        }

        repo.members(guild_id, list).await
    }
}
