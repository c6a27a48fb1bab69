use std::sync::Arc;

use chrono::{DateTime, Local};
use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::{
    data::{GuildConfigRepository, InventoryRepository, RosterRepository, RsvpRepository},
    error::AppError,
    model::{weekday_name, GuildConfigParams, Member, RsvpList},
    scheduler::SessionAlerts,
    service::{RosterStatusService, RsvpService},
};

const COMMAND_NAMES: &[&str] = &[
    "commands",
    "config",
    "forcealert",
    "inv",
    "list",
    "ping",
    "register",
    "reset",
    "rsvp",
    "skip",
    "unconfig",
    "unregister",
    "uptime",
    "vote",
];

/// Discord bot event handler for the prefix commands.
///
/// Commands mutate state through the service layer and reply with a short
/// confirmation; rendering stays here, out of the core.
pub struct Handler {
    db: DatabaseConnection,
    alerts: Arc<SessionAlerts>,
    prefix: String,
    started_at: DateTime<Local>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, alerts: Arc<SessionAlerts>, prefix: String) -> Self {
        Self {
            db,
            alerts,
            prefix,
            started_at: Local::now(),
        }
    }

    async fn dispatch(
        &self,
        guild_id: u64,
        msg: &Message,
        input: &str,
    ) -> Result<Option<String>, AppError> {
        let member = Member::from_user(msg.author.id.get(), &msg.author.name);
        let mut parts = input.split_whitespace();

        match (parts.next(), parts.next()) {
            (Some("ping"), _) => Ok(Some("I'm alive!".to_string())),

            (Some("commands"), _) => {
                let listing = COMMAND_NAMES
                    .iter()
                    .map(|name| format!("`{}{}`", self.prefix, name))
                    .collect::<Vec<_>>()
                    .join(", ");
                Ok(Some(format!("Available commands: {listing}")))
            }

            (Some("uptime"), _) => Ok(Some(format!(
                "Up for {}",
                format_uptime(Local::now() - self.started_at)
            ))),

            (Some("inv"), sub) => {
                let args = parts.collect::<Vec<_>>().join(" ");
                self.inventory(guild_id, &member, sub, &args).await
            }

            (Some("rsvp"), Some("accept")) => {
                let attendees = RsvpService::new(&self.db).accept(guild_id, &member).await?;
                Ok(Some(format!(
                    "Thanks for confirming, see you there!\nAttendees: {}",
                    render_names(&attendees)
                )))
            }
            (Some("rsvp"), Some("decline")) => {
                let decliners = RsvpService::new(&self.db).decline(guild_id, &member).await?;
                Ok(Some(format!(
                    "No problem, see you next time!\nDeclined: {}",
                    render_names(&decliners)
                )))
            }
            (Some("rsvp"), _) => Ok(Some(format!(
                "Please use either `{prefix}rsvp accept` or `{prefix}rsvp decline`.",
                prefix = self.prefix
            ))),

            (Some("vote"), Some("dream")) => {
                let dreamers = RsvpService::new(&self.db)
                    .vote(guild_id, RsvpList::Dreamers, &member)
                    .await?;
                Ok(Some(format!(
                    "You've been added to the dreaming list!\nDreamers: {}",
                    render_names(&dreamers)
                )))
            }
            (Some("vote"), Some("cancel")) => {
                let cancellers = RsvpService::new(&self.db)
                    .vote(guild_id, RsvpList::Cancellers, &member)
                    .await?;
                Ok(Some(format!(
                    "You've voted to cancel this week.\nCancel votes: {}",
                    render_names(&cancellers)
                )))
            }
            (Some("vote"), _) => Ok(Some(format!(
                "Please use either `{prefix}vote dream` or `{prefix}vote cancel`.",
                prefix = self.prefix
            ))),

            (Some("register"), _) => {
                let added = RosterRepository::new(&self.db)
                    .register(guild_id, &member)
                    .await?;
                Ok(Some(if added {
                    format!("{} is now on the roster.", member.name)
                } else {
                    format!("{} is already on the roster.", member.name)
                }))
            }
            (Some("unregister"), _) => {
                let removed = RosterRepository::new(&self.db)
                    .unregister(guild_id, &member.id)
                    .await?;
                Ok(Some(if removed {
                    format!("{} has been taken off the roster.", member.name)
                } else {
                    format!("{} was not on the roster.", member.name)
                }))
            }

            (Some("list"), _) => Ok(Some(self.render_lists(guild_id).await?)),

            (Some("reset"), _) => {
                RosterStatusService::new(&self.db).reset(guild_id).await?;
                Ok(Some("Weekly reset complete!".to_string()))
            }
            (Some("skip"), _) => {
                let updated = GuildConfigRepository::new(&self.db)
                    .set_alerts_enabled(guild_id, false)
                    .await?;
                Ok(Some(if updated {
                    "Skipping this week!".to_string()
                } else {
                    "This server has no session configured.".to_string()
                }))
            }
            (Some("config"), day) => {
                let usage = format!(
                    "Usage: `{prefix}config <weekday 0-6> <HH:MM> [first alert day] [second alert day] [voice channel id]`",
                    prefix = self.prefix
                );

                let (Some(Ok(session_weekday)), Some(time)) =
                    (day.map(str::parse::<i32>), parts.next())
                else {
                    return Ok(Some(usage));
                };
                let first_alert_weekday = match parts.next().map(str::parse) {
                    None => 0,
                    Some(Ok(day)) => day,
                    Some(Err(_)) => return Ok(Some(usage)),
                };
                let second_alert_weekday = match parts.next().map(str::parse) {
                    None => 2,
                    Some(Ok(day)) => day,
                    Some(Err(_)) => return Ok(Some(usage)),
                };
                let voice_channel_id = match parts.next().map(str::parse::<u64>) {
                    None => None,
                    Some(Ok(id)) => Some(id),
                    Some(Err(_)) => return Ok(Some(usage)),
                };

                let params = GuildConfigParams {
                    organizer: member.clone(),
                    channel_id: msg.channel_id.get(),
                    voice_channel_id,
                    session_weekday,
                    session_time: time.to_string(),
                    first_alert_weekday,
                    second_alert_weekday,
                };

                match GuildConfigRepository::new(&self.db).upsert(guild_id, params).await {
                    Ok(cfg) => {
                        let mut reply = format!(
                            "Session set for {} at {}. Alerts go out on {} and {}.",
                            weekday_name(cfg.session_weekday),
                            cfg.session_time,
                            weekday_name(cfg.first_alert_weekday),
                            weekday_name(cfg.second_alert_weekday),
                        );
                        if let Some(vc) = cfg.voice_channel_id.as_deref() {
                            reply.push_str(&format!(" Voice channel: <#{vc}>."));
                        }
                        Ok(Some(reply))
                    }
                    Err(AppError::InvalidWeekday(day)) => Ok(Some(format!(
                        "{day} is not a weekday, use 0 (Monday) through 6 (Sunday)."
                    ))),
                    Err(e) => Err(e),
                }
            }
            (Some("unconfig"), _) => {
                let deleted = GuildConfigRepository::new(&self.db).delete(guild_id).await?;
                Ok(Some(if deleted {
                    "Session configuration removed.".to_string()
                } else {
                    "This server has no session configured.".to_string()
                }))
            }

            (Some("forcealert"), _) => {
                if self.alerts.run_sweep(Local::now(), true).await? {
                    Ok(Some("Forced alert sweep complete.".to_string()))
                } else {
                    Ok(Some(
                        "Another sweep is already running, try again in a moment.".to_string(),
                    ))
                }
            }

            _ => Ok(None),
        }
    }

    async fn inventory(
        &self,
        guild_id: u64,
        member: &Member,
        sub: Option<&str>,
        args: &str,
    ) -> Result<Option<String>, AppError> {
        let repo = InventoryRepository::new(&self.db);

        match sub {
            None => {
                let items = repo.items(guild_id, &member.id).await?;
                if items.is_empty() {
                    return Ok(Some(format!("{}'s inventory: << Empty >>", member.name)));
                }

                let lines = items
                    .iter()
                    .map(|entry| format!("{}:{}", entry.qty, entry.item))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(Some(format!("{}'s inventory:\n{lines}", member.name)))
            }

            Some("add") => {
                let Some(pairs) = parse_item_pairs(args) else {
                    return Ok(Some(format!(
                        "Usage: `{prefix}inv add <qty>:<item>[, <qty>:<item>...]`",
                        prefix = self.prefix
                    )));
                };

                for (qty, item) in &pairs {
                    if !repo.add(guild_id, &member.id, item, *qty).await? {
                        return Ok(Some(format!(
                            "You already have {item}, use `{prefix}inv update` to change the quantity.",
                            prefix = self.prefix
                        )));
                    }
                }
                Ok(Some("Inventory updated.".to_string()))
            }

            Some("remove") => {
                let item = args.trim();
                if item.is_empty() {
                    return Ok(Some(format!(
                        "Usage: `{prefix}inv remove <item>`",
                        prefix = self.prefix
                    )));
                }

                let removed = repo.remove(guild_id, &member.id, item).await?;
                Ok(Some(if removed {
                    format!("Removed {item} from your inventory.")
                } else {
                    format!("{item} is not in your inventory.")
                }))
            }

            Some("update") => {
                let Some(pairs) = parse_item_pairs(args) else {
                    return Ok(Some(format!(
                        "Usage: `{prefix}inv update <qty>:<item>[, <qty>:<item>...]`",
                        prefix = self.prefix
                    )));
                };

                for (qty, item) in &pairs {
                    match repo.set_qty(guild_id, &member.id, item, *qty).await {
                        Ok(_) => {}
                        Err(AppError::NotFound(_)) => {
                            return Ok(Some(format!("{item} is not in your inventory.")));
                        }
                        Err(e) => return Err(e),
                    }
                }
                Ok(Some("Inventory updated.".to_string()))
            }

            Some(_) => Ok(Some(format!(
                "Please use `{prefix}inv`, `{prefix}inv add`, `{prefix}inv remove`, or `{prefix}inv update`.",
                prefix = self.prefix
            ))),
        }
    }

    async fn render_lists(&self, guild_id: u64) -> Result<String, AppError> {
        let repo = RsvpRepository::new(&self.db);
        let attendees = repo.members(guild_id, RsvpList::Attendees).await?;
        let decliners = repo.members(guild_id, RsvpList::Decliners).await?;
        let dreamers = repo.members(guild_id, RsvpList::Dreamers).await?;
        let cancellers = repo.members(guild_id, RsvpList::Cancellers).await?;

        Ok(format!(
            "Accepted: {}\nDeclined: {}\nDreamers: {}\nCancelled: {}",
            render_names(&attendees),
            render_names(&decliners),
            render_names(&dreamers),
            render_names(&cancellers),
        ))
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::custom("Herding the party")));
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(rest) = msg.content.strip_prefix(&self.prefix) else {
            return;
        };
        let Some(guild_id) = msg.guild_id else {
            return;
        };

        let reply = match self.dispatch(guild_id.get(), &msg, rest.trim()).await {
            Ok(Some(text)) => text,
            Ok(None) => return,
            Err(e) => {
                tracing::error!("Command `{}` failed: {}", rest.trim(), e);
                "Something went wrong, please try again later.".to_string()
            }
        };

        if let Err(e) = msg.channel_id.say(&ctx.http, reply).await {
            tracing::error!("Failed to reply in channel {}: {}", msg.channel_id, e);
        }
    }
}

fn render_names(members: &[Member]) -> String {
    if members.is_empty() {
        return "None".to_string();
    }

    members
        .iter()
        .map(|member| member.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a comma-separated list of `qty:item` pairs, as used by the
/// inventory commands. `None` means the input was malformed or empty.
fn parse_item_pairs(args: &str) -> Option<Vec<(i32, String)>> {
    let mut pairs = Vec::new();

    for chunk in args.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }

        let (qty, item) = chunk.split_once(':')?;
        let qty: i32 = qty.trim().parse().ok()?;
        let item = item.trim();
        if item.is_empty() {
            return None;
        }

        pairs.push((qty, item.to_string()));
    }

    if pairs.is_empty() {
        None
    } else {
        Some(pairs)
    }
}

fn format_uptime(elapsed: chrono::Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else {
        format!("{hours}h {minutes}m {seconds}s")
    }
}
