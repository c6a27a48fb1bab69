use std::collections::HashSet;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::{GuildConfigRepository, RosterRepository, RsvpRepository},
    model::{Member, RsvpList, Unanswered},
};

/// Derives roster-level facts from the stored RSVP state.
pub struct RosterStatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterStatusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether every roster member has confirmed attendance.
    ///
    /// True iff the roster is a subset of the attendee list, compared by
    /// member ID. An empty roster is vacuously complete; callers that treat
    /// "full group" as a celebratory condition must rule that case out
    /// themselves.
    pub async fn is_full_group(&self, guild_id: u64) -> Result<bool, DbErr> {
        let roster = RosterRepository::new(self.db).members(guild_id).await?;
        let attendees = self.member_ids(guild_id, RsvpList::Attendees).await?;

        Ok(roster.iter().all(|member| attendees.contains(&member.id)))
    }

    /// Lists the roster members that have neither accepted nor declined.
    ///
    /// Computes roster minus (attendees union decliners). When nobody has
    /// answered at all, the sentinel `Unanswered::Everyone` stands in for the
    /// whole roster so the notification layer can address the community role
    /// instead of every member. An empty roster yields an empty member list,
    /// not the sentinel.
    pub async fn unanswered(&self, guild_id: u64) -> Result<Unanswered, DbErr> {
        let roster = RosterRepository::new(self.db).members(guild_id).await?;
        if roster.is_empty() {
            return Ok(Unanswered::Members(Vec::new()));
        }

        let mut answered = self.member_ids(guild_id, RsvpList::Attendees).await?;
        answered.extend(self.member_ids(guild_id, RsvpList::Decliners).await?);

        let roster_len = roster.len();
        let unanswered: Vec<Member> = roster
            .into_iter()
            .filter(|member| !answered.contains(&member.id))
            .collect();

        if unanswered.len() == roster_len {
            Ok(Unanswered::Everyone)
        } else {
            Ok(Unanswered::Members(unanswered))
        }
    }

    /// Wipes the guild's RSVP state for the next cycle.
    ///
    /// Clears every RSVP list and the session-cancelled flag. Roster and
    /// configuration are untouched, as is every other guild's state.
    pub async fn reset(&self, guild_id: u64) -> Result<(), DbErr> {
        RsvpRepository::new(self.db).clear_all(guild_id).await?;
        GuildConfigRepository::new(self.db)
            .set_cancelled(guild_id, false)
            .await?;

        Ok(())
    }

    async fn member_ids(&self, guild_id: u64, list: RsvpList) -> Result<HashSet<String>, DbErr> {
        let members = RsvpRepository::new(self.db).members(guild_id, list).await?;

        Ok(members.into_iter().map(|member| member.id).collect())
    }
}
