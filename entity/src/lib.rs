pub mod guild_config;
pub mod inventory_item;
pub mod prelude;
pub mod roster_member;
pub mod rsvp_entry;
