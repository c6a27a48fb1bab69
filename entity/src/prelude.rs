pub use super::guild_config::Entity as GuildConfig;
pub use super::inventory_item::Entity as InventoryItem;
pub use super::roster_member::Entity as RosterMember;
pub use super::rsvp_entry::Entity as RsvpEntry;
