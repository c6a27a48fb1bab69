use chrono::NaiveDate;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::GuildConfigParams};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or fully replaces the configuration record for a guild.
    ///
    /// Whole-record replace semantics: every configuration column is written,
    /// including re-enabling alerts, clearing the cancelled flag, and clearing
    /// the last-alerted marker. There are no partial-field-merge guarantees.
    /// Weekday fields outside 0-6 are rejected before touching the store.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID (u64, stored as string)
    /// - `params`: Full set of configuration fields
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored configuration
    /// - `Err(AppError::InvalidWeekday)`: A weekday field was out of range
    /// - `Err(AppError::Db)`: Database error
    pub async fn upsert(
        &self,
        guild_id: u64,
        params: GuildConfigParams,
    ) -> Result<entity::guild_config::Model, AppError> {
        params.validate()?;

        let model = entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            organizer_id: ActiveValue::Set(params.organizer.id),
            organizer_name: ActiveValue::Set(params.organizer.name),
            channel_id: ActiveValue::Set(params.channel_id.to_string()),
            voice_channel_id: ActiveValue::Set(params.voice_channel_id.map(|c| c.to_string())),
            session_weekday: ActiveValue::Set(params.session_weekday),
            session_time: ActiveValue::Set(params.session_time),
            first_alert_weekday: ActiveValue::Set(params.first_alert_weekday),
            second_alert_weekday: ActiveValue::Set(params.second_alert_weekday),
            alerts_enabled: ActiveValue::Set(true),
            cancelled: ActiveValue::Set(false),
            last_alerted_on: ActiveValue::Set(None),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .update_columns([
                    entity::guild_config::Column::OrganizerId,
                    entity::guild_config::Column::OrganizerName,
                    entity::guild_config::Column::ChannelId,
                    entity::guild_config::Column::VoiceChannelId,
                    entity::guild_config::Column::SessionWeekday,
                    entity::guild_config::Column::SessionTime,
                    entity::guild_config::Column::FirstAlertWeekday,
                    entity::guild_config::Column::SecondAlertWeekday,
                    entity::guild_config::Column::AlertsEnabled,
                    entity::guild_config::Column::Cancelled,
                    entity::guild_config::Column::LastAlertedOn,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(model)
    }

    /// Gets the configuration for a guild, `None` when the guild has none.
    pub async fn get(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_config::Model>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }

    /// Deletes the configuration for a guild.
    ///
    /// # Returns
    /// - `Ok(true)`: A record was deleted
    /// - `Ok(false)`: The guild had no configuration
    pub async fn delete(&self, guild_id: u64) -> Result<bool, DbErr> {
        let res = entity::prelude::GuildConfig::delete_many()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(res.rows_affected > 0)
    }

    /// Finds every alert-enabled configuration whose first alert falls on the
    /// given weekday. Result order is unspecified.
    pub async fn find_by_first_alert_day(
        &self,
        weekday: i32,
    ) -> Result<Vec<entity::guild_config::Model>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::FirstAlertWeekday.eq(weekday))
            .filter(entity::guild_config::Column::AlertsEnabled.eq(true))
            .all(self.db)
            .await
    }

    /// Finds every alert-enabled configuration whose second alert falls on the
    /// given weekday. Result order is unspecified.
    pub async fn find_by_second_alert_day(
        &self,
        weekday: i32,
    ) -> Result<Vec<entity::guild_config::Model>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::SecondAlertWeekday.eq(weekday))
            .filter(entity::guild_config::Column::AlertsEnabled.eq(true))
            .all(self.db)
            .await
    }

    /// Finds every alert-enabled configuration whose session falls on the
    /// given weekday. Result order is unspecified.
    pub async fn find_by_session_day(
        &self,
        weekday: i32,
    ) -> Result<Vec<entity::guild_config::Model>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::SessionWeekday.eq(weekday))
            .filter(entity::guild_config::Column::AlertsEnabled.eq(true))
            .all(self.db)
            .await
    }

    /// Toggles the alert schedule for a guild (`false` skips the cycle).
    ///
    /// # Returns
    /// - `Ok(true)`: The guild had a configuration and it was updated
    /// - `Ok(false)`: The guild has no configuration
    pub async fn set_alerts_enabled(&self, guild_id: u64, enabled: bool) -> Result<bool, DbErr> {
        let res = entity::prelude::GuildConfig::update_many()
            .col_expr(entity::guild_config::Column::AlertsEnabled, Expr::value(enabled))
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(res.rows_affected > 0)
    }

    /// Sets or clears the session-cancelled flag for a guild.
    pub async fn set_cancelled(&self, guild_id: u64, cancelled: bool) -> Result<bool, DbErr> {
        let res = entity::prelude::GuildConfig::update_many()
            .col_expr(entity::guild_config::Column::Cancelled, Expr::value(cancelled))
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(res.rows_affected > 0)
    }

    /// Records the calendar day on which the guild was last alerted.
    ///
    /// Used by the optional once-per-day alert dedup.
    pub async fn touch_last_alerted(&self, guild_id: u64, date: NaiveDate) -> Result<(), DbErr> {
        entity::prelude::GuildConfig::update_many()
            .col_expr(
                entity::guild_config::Column::LastAlertedOn,
                Expr::value(Some(date)),
            )
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
