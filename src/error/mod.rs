//! Application error types.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors.
//! Most variants use `#[from]` for automatic conversion with `?`.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    Scheduler(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// A targeted update addressed a record that does not exist, such as an
    /// inventory quantity change for an item the member does not hold.
    #[error("{0}")]
    NotFound(String),

    /// A weekday value outside the 0 (Monday) to 6 (Sunday) range.
    ///
    /// Rejected at configuration-write time, before anything touches the store.
    #[error("weekday out of range 0-6: {0}")]
    InvalidWeekday(i32),

    /// Internal error with a detail message, such as a malformed stored ID.
    #[error("{0}")]
    Internal(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}
