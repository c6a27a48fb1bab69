//! Domain models shared across the data and service layers.

use crate::error::AppError;

/// A guild member as tracked by the roster and RSVP lists.
///
/// The `id` is the Discord snowflake in its stored string form, matching how
/// IDs are persisted. Two members are the same member iff their ids match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Builds a member from a Discord user ID and display name.
    pub fn from_user(id: u64, name: &str) -> Self {
        Self::new(id.to_string(), name)
    }
}

/// The RSVP lists a member can appear on.
///
/// `Attendees` and `Decliners` are the two mutually exclusive answers to the
/// weekly poll; `Dreamers` and `Cancellers` are auxiliary alternate-plan vote
/// lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RsvpList {
    Attendees,
    Decliners,
    Dreamers,
    Cancellers,
}

impl RsvpList {
    /// The stored name of the list.
    pub fn as_str(self) -> &'static str {
        match self {
            RsvpList::Attendees => "attendees",
            RsvpList::Decliners => "decliners",
            RsvpList::Dreamers => "dreamers",
            RsvpList::Cancellers => "cancellers",
        }
    }
}

/// Result of asking which roster members have not answered the poll yet.
///
/// When nobody has answered, `Everyone` stands in for the whole roster so the
/// notification layer can address the community role instead of enumerating
/// every member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unanswered {
    Everyone,
    Members(Vec<Member>),
}

/// Fields written by a full guild configuration upsert.
#[derive(Clone, Debug)]
pub struct GuildConfigParams {
    pub organizer: Member,
    pub channel_id: u64,
    pub voice_channel_id: Option<u64>,
    pub session_weekday: i32,
    pub session_time: String,
    pub first_alert_weekday: i32,
    pub second_alert_weekday: i32,
}

impl GuildConfigParams {
    /// Checks every weekday field is within 0 (Monday) to 6 (Sunday).
    pub fn validate(&self) -> Result<(), AppError> {
        for day in [
            self.session_weekday,
            self.first_alert_weekday,
            self.second_alert_weekday,
        ] {
            validate_weekday(day)?;
        }
        Ok(())
    }
}

/// Rejects weekday values outside 0 (Monday) to 6 (Sunday).
pub fn validate_weekday(weekday: i32) -> Result<(), AppError> {
    if (0..=6).contains(&weekday) {
        Ok(())
    } else {
        Err(AppError::InvalidWeekday(weekday))
    }
}

/// Human-readable weekday name for message rendering, 0 = Monday.
///
/// Callers validate the weekday before storing it; anything out of range here
/// falls back to a neutral label rather than panicking in a message path.
pub fn weekday_name(weekday: i32) -> &'static str {
    match weekday {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        6 => "Sunday",
        _ => "session day",
    }
}
