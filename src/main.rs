use std::sync::Arc;

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use sessionherd::{
    bot,
    config::Config,
    error::AppError,
    notify::DiscordNotifier,
    scheduler::{self, AlertPolicy, SessionAlerts},
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    // The notifier gets its own HTTP client so the scheduler can deliver
    // messages independently of the gateway connection.
    let http = Arc::new(Http::new(&config.discord_token));
    let notifier = Arc::new(DiscordNotifier::new(http));
    let alerts = Arc::new(SessionAlerts::new(
        db.clone(),
        notifier,
        AlertPolicy::from(&config),
    ));

    scheduler::start_scheduler(alerts.clone()).await?;

    let mut client = bot::start::build_client(&config, db, alerts).await?;

    tracing::info!("Starting sessionherd");

    client.start().await?;

    Ok(())
}
