//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use crate::{error::TestError, TestContext};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture records. Methods can be chained together and finalized with `build()`.
///
/// Fixture users, characters, and planets are inserted in the order they were added,
/// so the first user gets ID 1, the second ID 2, and so on. Favorites reference those IDs.
///
/// # Example
/// ```ignore
/// let test = TestBuilder::new()
///     .with_all_tables()
///     .with_mock_user("luke")
///     .with_mock_character("Yoda")
///     .with_favorite_character(1, 1)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    characters: Vec<String>,
    planets: Vec<String>,
    favorite_characters: Vec<(i32, i32)>, // (user_id, character_id)
    favorite_planets: Vec<(i32, i32)>,    // (user_id, planet_id)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new, empty test builder.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
            favorite_characters: Vec::new(),
            favorite_planets: Vec::new(),
        }
    }

    /// Create every table of the schema, parents before join tables.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Create the table for a single entity.
    ///
    /// Tables are created in the order they are added, so referenced tables must come
    /// before the tables that reference them.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a user fixture with the given username.
    pub fn with_mock_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Queue a character fixture with the given name.
    pub fn with_mock_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    /// Queue a planet fixture with the given name.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Queue a favorite character join record.
    pub fn with_favorite_character(mut self, user_id: i32, character_id: i32) -> Self {
        self.favorite_characters.push((user_id, character_id));
        self
    }

    /// Queue a favorite planet join record.
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorite_planets.push((user_id, planet_id));
        self
    }

    /// Build the test context, executing all queued operations.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_mock_user(&username).await?;
        }

        for name in self.characters {
            setup.character().insert_mock_character(&name).await?;
        }

        for name in self.planets {
            setup.planet().insert_mock_planet(&name).await?;
        }

        for (user_id, character_id) in self.favorite_characters {
            setup
                .favorite()
                .insert_favorite_character(user_id, character_id)
                .await?;
        }

        for (user_id, planet_id) in self.favorite_planets {
            setup
                .favorite()
                .insert_favorite_planet(user_id, planet_id)
                .await?;
        }

        Ok(setup)
    }
}
