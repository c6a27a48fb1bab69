//! Hourly alert sweep over every guild's session configuration.
//!
//! The dispatcher is stateless across ticks: each sweep recomputes everything
//! from the current wall-clock time and the stored data, so a missed or
//! duplicated tick is self-correcting. Within one matching hour, delivery is
//! at-least-once unless the once-per-day dedup is enabled.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    config::Config,
    data::{GuildConfigRepository, RsvpRepository},
    error::AppError,
    model::RsvpList,
    notify::Notifier,
    service::{RosterStatusService, SessionNotificationService},
};

/// Deployment knobs the sweep consults on every tick.
#[derive(Clone, Copy, Debug)]
pub struct AlertPolicy {
    /// Local hour (0-23) the scheduled tick is allowed to act on.
    pub alert_hour: u32,
    /// Alert each guild at most once per calendar day.
    pub once_per_day: bool,
    /// Also wipe RSVP state for groups that ended the week fully confirmed.
    pub reset_full_group: bool,
}

impl From<&Config> for AlertPolicy {
    fn from(config: &Config) -> Self {
        Self {
            alert_hour: config.alert_hour,
            once_per_day: config.alert_once_per_day,
            reset_full_group: config.reset_full_group,
        }
    }
}

enum AlertKind {
    First,
    Second,
}

/// The alert dispatcher.
///
/// Holds everything one sweep needs plus a single-slot lock that keeps a
/// scheduled tick and a forced dispatch from interleaving.
pub struct SessionAlerts {
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    policy: AlertPolicy,
    sweep_lock: tokio::sync::Mutex<()>,
}

impl SessionAlerts {
    pub fn new(db: DatabaseConnection, notifier: Arc<dyn Notifier>, policy: AlertPolicy) -> Self {
        Self {
            db,
            notifier,
            policy,
            sweep_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Runs one dispatch sweep for the given wall-clock instant.
    ///
    /// Unless `force` is set, the sweep returns without side effects when the
    /// current hour differs from the configured alert hour. A forced sweep
    /// skips the hour gate but still respects weekday matching, so an
    /// operator can trigger "what would happen right now" at any time.
    ///
    /// A configuration lookup failure aborts the whole tick; the next tick
    /// recomputes from scratch. Per-guild delivery and reset failures are
    /// logged and never abort the sweep.
    ///
    /// # Returns
    /// - `Ok(true)`: The sweep ran
    /// - `Ok(false)`: Nothing ran; either another sweep held the lock or the
    ///   hour gate filtered an unforced tick
    pub async fn run_sweep(&self, now: DateTime<Local>, force: bool) -> Result<bool, AppError> {
        let Ok(_guard) = self.sweep_lock.try_lock() else {
            tracing::warn!("Alert sweep already in progress, skipping this tick");
            return Ok(false);
        };

        if !force && now.hour() != self.policy.alert_hour {
            return Ok(false);
        }

        let weekday = now.weekday().num_days_from_monday() as i32;
        let today = now.date_naive();
        tracing::debug!("Running alert sweep for weekday {weekday} (forced: {force})");

        let repo = GuildConfigRepository::new(&self.db);

        for cfg in repo.find_by_first_alert_day(weekday).await? {
            if let Err(e) = self.alert_guild(&cfg, today, AlertKind::First).await {
                tracing::error!("Failed to send first alert for guild {}: {}", cfg.guild_id, e);
            }
        }

        for cfg in repo.find_by_second_alert_day(weekday).await? {
            if let Err(e) = self.alert_guild(&cfg, today, AlertKind::Second).await {
                tracing::error!(
                    "Failed to send second alert for guild {}: {}",
                    cfg.guild_id,
                    e
                );
            }
        }

        for cfg in repo.find_by_session_day(weekday).await? {
            if let Err(e) = self.session_day_guild(&cfg).await {
                tracing::error!(
                    "Failed to send session-day summary for guild {}: {}",
                    cfg.guild_id,
                    e
                );
            }
        }

        // The day after each guild's session, wipe RSVP state for the next
        // cycle.
        for cfg in repo.find_by_session_day((weekday + 6) % 7).await? {
            if let Err(e) = self.reset_guild(&cfg).await {
                tracing::error!("Failed to reset RSVP state for guild {}: {}", cfg.guild_id, e);
            }
        }

        Ok(true)
    }

    /// Nudges one guild's unanswered members, if any.
    async fn alert_guild(
        &self,
        cfg: &entity::guild_config::Model,
        today: NaiveDate,
        kind: AlertKind,
    ) -> Result<(), AppError> {
        if cfg.cancelled {
            tracing::debug!("Guild {} cancelled this session, skipping alert", cfg.guild_id);
            return Ok(());
        }
        if self.policy.once_per_day && cfg.last_alerted_on == Some(today) {
            return Ok(());
        }

        let guild_id = parse_id(&cfg.guild_id, "guild ID")?;
        let status = RosterStatusService::new(&self.db);
        if status.is_full_group(guild_id).await? {
            return Ok(());
        }

        let unanswered = status.unanswered(guild_id).await?;
        let channel_id = parse_id(&cfg.channel_id, "channel ID")?;
        let notifications = SessionNotificationService::new(self.notifier.as_ref());

        let sent = match kind {
            AlertKind::First => {
                notifications
                    .send_first_alert(channel_id, cfg.session_weekday, &unanswered)
                    .await?
            }
            AlertKind::Second => {
                notifications
                    .send_second_alert(channel_id, &unanswered)
                    .await?
            }
        };

        if sent && self.policy.once_per_day {
            GuildConfigRepository::new(&self.db)
                .touch_last_alerted(guild_id, today)
                .await?;
        }

        Ok(())
    }

    /// Sends the organizer their session-day summary, and asks the channel
    /// for an alternate plan when the group is short-handed.
    async fn session_day_guild(
        &self,
        cfg: &entity::guild_config::Model,
    ) -> Result<(), AppError> {
        let guild_id = parse_id(&cfg.guild_id, "guild ID")?;
        let organizer_id = parse_id(&cfg.organizer_id, "organizer ID")?;

        let rsvp = RsvpRepository::new(&self.db);
        let attendees = rsvp.members(guild_id, RsvpList::Attendees).await?;
        let decliners = rsvp.members(guild_id, RsvpList::Decliners).await?;

        let notifications = SessionNotificationService::new(self.notifier.as_ref());
        notifications
            .send_organizer_summary(organizer_id, &attendees, &decliners)
            .await?;

        let status = RosterStatusService::new(&self.db);
        if !cfg.cancelled && !status.is_full_group(guild_id).await? {
            let channel_id = parse_id(&cfg.channel_id, "channel ID")?;
            notifications.send_session_decision(channel_id).await?;
        }

        Ok(())
    }

    /// Wipes one guild's RSVP state after its session.
    ///
    /// A fully confirmed group keeps its state unless the deployment opts in
    /// to resetting it as well.
    async fn reset_guild(&self, cfg: &entity::guild_config::Model) -> Result<(), AppError> {
        let guild_id = parse_id(&cfg.guild_id, "guild ID")?;
        let status = RosterStatusService::new(&self.db);

        if status.is_full_group(guild_id).await? && !self.policy.reset_full_group {
            return Ok(());
        }

        status.reset(guild_id).await?;
        tracing::info!("Weekly RSVP reset complete for guild {}", cfg.guild_id);

        Ok(())
    }
}

/// Starts the session alert scheduler.
///
/// The job runs at the top of every hour; the hour gate inside `run_sweep`
/// decides whether the tick acts.
pub async fn start_scheduler(alerts: Arc<SessionAlerts>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_alerts = alerts.clone();
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let alerts = job_alerts.clone();

        Box::pin(async move {
            if let Err(e) = alerts.run_sweep(Local::now(), false).await {
                tracing::error!("Error processing session alerts: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session alert scheduler started");

    Ok(())
}

fn parse_id(value: &str, what: &str) -> Result<u64, AppError> {
    value
        .parse()
        .map_err(|_| AppError::Internal(format!("Invalid {what}: {value}")))
}
