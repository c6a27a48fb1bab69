use crate::data::guild_config::GuildConfigRepository;
use crate::model::{GuildConfigParams, Member};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;

/// Params for a Friday session with a Monday first alert and Wednesday
/// second alert.
fn default_params() -> GuildConfigParams {
    GuildConfigParams {
        organizer: Member::new("100", "Organizer"),
        channel_id: 200,
        voice_channel_id: None,
        session_weekday: 4,
        session_time: "19:30".to_string(),
        first_alert_weekday: 0,
        second_alert_weekday: 2,
    }
}
