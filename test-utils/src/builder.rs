use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{GuildConfig, RosterMember};
///
/// let test = TestBuilder::new()
///     .with_table(GuildConfig)
///     .with_table(RosterMember)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. The table will be created when `build()` is called.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables the session tracking domain uses.
    ///
    /// This convenience method adds the following tables:
    /// - GuildConfig
    /// - RosterMember
    /// - RsvpEntry
    ///
    /// Use this when testing services or the alert scheduler, which touch
    /// several tables in one pass.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_session_tables(self) -> Self {
        self.with_table(GuildConfig)
            .with_table(RosterMember)
            .with_table(RsvpEntry)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE
    /// TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
