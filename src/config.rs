use crate::error::{config::ConfigError, AppError};

/// Hour of day (local time) at which scheduled alert sweeps act, unless
/// overridden through `ALERT_HOUR`.
const DEFAULT_ALERT_HOUR: u32 = 16;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub discord_token: String,
    pub command_prefix: String,

    /// Local hour (0-23) the hourly tick is allowed to act on.
    pub alert_hour: u32,
    /// When set, a guild is alerted at most once per calendar day even if
    /// several ticks land inside the matching hour.
    pub alert_once_per_day: bool,
    /// When set, the day-after sweep also wipes RSVP state for groups that
    /// ended the week fully confirmed.
    pub reset_full_group: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            command_prefix: std::env::var("COMMAND_PREFIX").unwrap_or_else(|_| "!".to_string()),
            alert_hour: parse_hour("ALERT_HOUR")?.unwrap_or(DEFAULT_ALERT_HOUR),
            alert_once_per_day: flag_from_env("ALERT_ONCE_PER_DAY"),
            reset_full_group: flag_from_env("RESET_FULL_GROUP"),
        })
    }
}

fn parse_hour(var: &str) -> Result<Option<u32>, AppError> {
    match std::env::var(var) {
        Err(_) => Ok(None),
        Ok(raw) => {
            let hour: u32 = raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar(var.to_string(), raw.clone()))?;
            if hour > 23 {
                return Err(ConfigError::InvalidEnvVar(var.to_string(), raw).into());
            }
            Ok(Some(hour))
        }
    }
}

fn flag_from_env(var: &str) -> bool {
    std::env::var(var)
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
