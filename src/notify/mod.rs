//! Delivery seam between the core and Discord.
//!
//! The scheduler and services talk to a `Notifier` rather than to Serenity
//! directly, so dispatch logic can be exercised against a recording fake.
//! Delivery failures are reported through the returned `Result`; the sink
//! itself never retries.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::{
    all::{ChannelId, UserId},
    http::Http,
};

use crate::error::AppError;

/// Sink for outgoing notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a message to a guild channel.
    async fn send_channel_message(&self, channel_id: u64, text: &str) -> Result<(), AppError>;

    /// Delivers a direct message to a user.
    async fn send_direct_message(&self, user_id: u64, text: &str) -> Result<(), AppError>;
}

/// Production notifier backed by the Discord HTTP API.
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send_channel_message(&self, channel_id: u64, text: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id).say(&self.http, text).await?;

        Ok(())
    }

    async fn send_direct_message(&self, user_id: u64, text: &str) -> Result<(), AppError> {
        let channel = UserId::new(user_id).create_dm_channel(&self.http).await?;
        channel.id.say(&self.http, text).await?;

        Ok(())
    }
}
