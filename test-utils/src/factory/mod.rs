//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Each entity has its own factory
//! module with both a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let config = factory::guild_config::create_guild_config(&db, 123).await?;
//!     let member = factory::roster_member::create_roster_member(&db, 123, 1, "P1").await?;
//!
//!     // Customize with the builder
//!     let config = factory::guild_config::GuildConfigFactory::new(&db)
//!         .guild_id("456")
//!         .session_weekday(6)
//!         .alerts_enabled(false)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod guild_config;
pub mod helpers;
pub mod inventory_item;
pub mod roster_member;
pub mod rsvp_entry;

// Re-export commonly used factory functions for concise usage
pub use guild_config::create_guild_config;
pub use inventory_item::create_inventory_item;
pub use roster_member::create_roster_member;
pub use rsvp_entry::create_rsvp_entry;
