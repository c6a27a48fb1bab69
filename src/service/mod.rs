//! Business logic orchestration between the bot/scheduler and the data layer.

pub mod notification;
pub mod roster_status;
pub mod rsvp;

pub use notification::SessionNotificationService;
pub use roster_status::RosterStatusService;
pub use rsvp::RsvpService;
