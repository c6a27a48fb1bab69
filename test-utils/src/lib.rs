//! Sessionherd Test Utils
//!
//! Shared testing utilities for building unit and integration tests for the
//! sessionherd bot. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases and customizable table schemas.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildConfig;
//!
//! #[tokio::test]
//! async fn test_config_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildConfig)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
