use crate::{
    error::AppError,
    model::{weekday_name, Member, Unanswered},
    notify::Notifier,
};

/// Renders and delivers the scheduler's session notifications.
pub struct SessionNotificationService<'a> {
    notifier: &'a dyn Notifier,
}

impl<'a> SessionNotificationService<'a> {
    pub fn new(notifier: &'a dyn Notifier) -> Self {
        Self { notifier }
    }

    /// Posts the early-week RSVP nudge addressed to unanswered members.
    ///
    /// Skipped when every roster member has already answered; there is no one
    /// left to address.
    pub async fn send_first_alert(
        &self,
        channel_id: u64,
        session_weekday: i32,
        unanswered: &Unanswered,
    ) -> Result<bool, AppError> {
        let Some(mentions) = render_mentions(unanswered) else {
            return Ok(false);
        };

        let text = format!(
            "{mentions} are we good for this {}'s session? Please answer with `rsvp accept` or `rsvp decline`.",
            weekday_name(session_weekday),
        );
        self.notifier.send_channel_message(channel_id, &text).await?;

        Ok(true)
    }

    /// Posts the late-week reminder with a firmer tone.
    pub async fn send_second_alert(
        &self,
        channel_id: u64,
        unanswered: &Unanswered,
    ) -> Result<bool, AppError> {
        let Some(mentions) = render_mentions(unanswered) else {
            return Ok(false);
        };

        let text = format!(
            "{mentions} the session is almost here and you still haven't answered. Please RSVP now with `rsvp accept` or `rsvp decline`.",
        );
        self.notifier.send_channel_message(channel_id, &text).await?;

        Ok(true)
    }

    /// Sends the organizer a direct message summarizing the current lists.
    pub async fn send_organizer_summary(
        &self,
        organizer_id: u64,
        attendees: &[Member],
        decliners: &[Member],
    ) -> Result<(), AppError> {
        let text = format!(
            "Confirm list: {}\nDecline list: {}",
            render_names(attendees),
            render_names(decliners),
        );
        self.notifier.send_direct_message(organizer_id, &text).await
    }

    /// Asks the channel for an alternate plan when the group is short-handed.
    pub async fn send_session_decision(&self, channel_id: u64) -> Result<(), AppError> {
        let text = "Looks like we don't have the full group for tonight's session.\n\
                    Would you like an alternate session or to cancel? Please answer with `vote dream` or `vote cancel`."
            .to_string();
        self.notifier.send_channel_message(channel_id, &text).await
    }
}

/// Renders the addressee block for an alert.
///
/// The everyone sentinel becomes an `@everyone` ping; a concrete member list
/// becomes individual mentions. `None` means nobody is left to address.
fn render_mentions(unanswered: &Unanswered) -> Option<String> {
    match unanswered {
        Unanswered::Everyone => Some("@everyone".to_string()),
        Unanswered::Members(members) if members.is_empty() => None,
        Unanswered::Members(members) => Some(
            members
                .iter()
                .map(|member| format!("<@{}>", member.id))
                .collect::<Vec<_>>()
                .join(" "),
        ),
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
