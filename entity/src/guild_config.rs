use sea_orm::entity::prelude::*;

/// Per-guild session configuration.
///
/// One row per Discord guild, keyed by `guild_id`. Weekdays are stored as
/// integers with 0 = Monday through 6 = Sunday. Discord snowflake IDs are
/// stored as strings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub organizer_id: String,
    pub organizer_name: String,
    pub channel_id: String,
    pub voice_channel_id: Option<String>,
    pub session_weekday: i32,
    pub session_time: String,
    pub first_alert_weekday: i32,
    pub second_alert_weekday: i32,
    pub alerts_enabled: bool,
    pub cancelled: bool,
    pub last_alerted_on: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
