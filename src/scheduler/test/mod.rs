use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{GuildConfigRepository, RsvpRepository},
    error::AppError,
    model::RsvpList,
    notify::Notifier,
    scheduler::{AlertPolicy, SessionAlerts},
};


/// Notifier fake that records every delivery instead of calling Discord.
///
/// An optional failing channel simulates a delivery error for one guild so
/// sweep isolation can be exercised.
struct RecordingNotifier {
    channel_messages: Mutex<Vec<(u64, String)>>,
    direct_messages: Mutex<Vec<(u64, String)>>,
    fail_channel: Option<u64>,
}

impl RecordingNotifier {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            channel_messages: Mutex::new(Vec::new()),
            direct_messages: Mutex::new(Vec::new()),
            fail_channel: None,
        })
    }

    fn failing_channel(channel_id: u64) -> Arc<Self> {
        Arc::new(Self {
            channel_messages: Mutex::new(Vec::new()),
            direct_messages: Mutex::new(Vec::new()),
            fail_channel: Some(channel_id),
        })
    }

    fn channel_messages(&self) -> Vec<(u64, String)> {
        self.channel_messages.lock().unwrap().clone()
    }

    fn direct_messages(&self) -> Vec<(u64, String)> {
        self.direct_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_channel_message(&self, channel_id: u64, text: &str) -> Result<(), AppError> {
        if self.fail_channel == Some(channel_id) {
            return Err(AppError::Internal(format!(
                "Simulated delivery failure for channel {channel_id}"
            )));
        }

        self.channel_messages
            .lock()
            .unwrap()
            .push((channel_id, text.to_string()));

        Ok(())
    }

    async fn send_direct_message(&self, user_id: u64, text: &str) -> Result<(), AppError> {
        self.direct_messages
            .lock()
            .unwrap()
            .push((user_id, text.to_string()));

        Ok(())
    }
}

fn policy() -> AlertPolicy {
    AlertPolicy {
        alert_hour: 16,
        once_per_day: false,
        reset_full_group: false,
    }
}

fn alerts(
    db: &DatabaseConnection,
    notifier: Arc<RecordingNotifier>,
    policy: AlertPolicy,
) -> SessionAlerts {
    SessionAlerts::new(db.clone(), notifier, policy)
}

/// A fixed point in August 2026: the 17th is a Monday, the 21st a Friday.
fn local_time(day: u32, hour: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap()
}
