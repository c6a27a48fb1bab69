//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations for each domain in the
//! application. Every operation is scoped by guild ID; no operation may
//! observe or mutate another guild's rows. Repositories return `DbErr`
//! (transient store failures surface to the caller) except where
//! configuration validation applies.

pub mod guild_config;
pub mod inventory;
pub mod roster;
pub mod rsvp;

pub use guild_config::GuildConfigRepository;
pub use inventory::InventoryRepository;
pub use roster::RosterRepository;
pub use rsvp::RsvpRepository;
