//! Attendance polling and alert scheduling for a recurring Discord session.
//!
//! The bot tracks, per guild, a roster of expected players and their RSVP
//! state for the next session, and runs an hourly scheduler that nudges
//! unanswered players, sends the organizer a summary on session day, and
//! wipes RSVP state the day after.
//!
//! # Architecture
//!
//! - **Data Layer** (`data/`) - SeaORM repositories for configuration, roster,
//!   and RSVP lists
//! - **Service Layer** (`service/`) - RSVP mutation protocol, roster status
//!   derivation, and notification rendering
//! - **Scheduler** (`scheduler/`) - Hourly alert sweep over all guild
//!   configurations
//! - **Bot** (`bot/`) - Discord gateway handler for prefix commands
//! - **Notify** (`notify/`) - Delivery seam between the core and Discord

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod notify;
pub mod scheduler;
pub mod service;
pub mod startup;
