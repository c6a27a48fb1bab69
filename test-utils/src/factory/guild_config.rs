//! Guild config factory for creating test configuration rows.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test guild configurations with customizable fields.
///
/// Defaults describe a Friday session with a Monday first alert and a
/// Wednesday second alert, alerts enabled and nothing cancelled.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id("987654321")
///     .first_alert_weekday(4)
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    organizer_id: String,
    organizer_name: String,
    channel_id: String,
    voice_channel_id: Option<String>,
    session_weekday: i32,
    session_time: String,
    first_alert_weekday: i32,
    second_alert_weekday: i32,
    alerts_enabled: bool,
    cancelled: bool,
    last_alerted_on: Option<NaiveDate>,
}

impl<'a> GuildConfigFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            organizer_id: next_id().to_string(),
            organizer_name: "Organizer".to_string(),
            channel_id: next_id().to_string(),
            voice_channel_id: None,
            session_weekday: 4,
            session_time: "19:30".to_string(),
            first_alert_weekday: 0,
            second_alert_weekday: 2,
            alerts_enabled: true,
            cancelled: false,
            last_alerted_on: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn organizer_id(mut self, organizer_id: impl Into<String>) -> Self {
        self.organizer_id = organizer_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn session_weekday(mut self, weekday: i32) -> Self {
        self.session_weekday = weekday;
        self
    }

    pub fn first_alert_weekday(mut self, weekday: i32) -> Self {
        self.first_alert_weekday = weekday;
        self
    }

    pub fn second_alert_weekday(mut self, weekday: i32) -> Self {
        self.second_alert_weekday = weekday;
        self
    }

    pub fn alerts_enabled(mut self, enabled: bool) -> Self {
        self.alerts_enabled = enabled;
        self
    }

    pub fn cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    pub fn last_alerted_on(mut self, date: Option<NaiveDate>) -> Self {
        self.last_alerted_on = date;
        self
    }

    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            organizer_id: ActiveValue::Set(self.organizer_id),
            organizer_name: ActiveValue::Set(self.organizer_name),
            channel_id: ActiveValue::Set(self.channel_id),
            voice_channel_id: ActiveValue::Set(self.voice_channel_id),
            session_weekday: ActiveValue::Set(self.session_weekday),
            session_time: ActiveValue::Set(self.session_time),
            first_alert_weekday: ActiveValue::Set(self.first_alert_weekday),
            second_alert_weekday: ActiveValue::Set(self.second_alert_weekday),
            alerts_enabled: ActiveValue::Set(self.alerts_enabled),
            cancelled: ActiveValue::Set(self.cancelled),
            last_alerted_on: ActiveValue::Set(self.last_alerted_on),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild configuration with default values for the given guild.
pub async fn create_guild_config(
    db: &DatabaseConnection,
    guild_id: u64,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db)
        .guild_id(guild_id.to_string())
        .build()
        .await
}
