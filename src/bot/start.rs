use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, scheduler::SessionAlerts};

/// Builds the Discord gateway client with the prefix-command handler attached.
///
/// The returned client has not been started yet; the caller drives
/// `client.start()` and decides how the alert scheduler runs alongside it.
pub async fn build_client(
    config: &Config,
    db: DatabaseConnection,
    alerts: Arc<SessionAlerts>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, alerts, config.command_prefix.clone());

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}
