//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't have to spell out the `entity` crate paths.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address
/// - `username` - Unique username
/// - `password` - Credential as provided on creation
/// - `is_active` - Whether the account is active, true on creation
pub type UserModel = entity::user::Model;

/// Type alias for Star Wars character database model.
///
/// # Fields (from `entity::character::Model`)
/// - `id` - Primary key
/// - `name` - Unique character name
/// - `height`, `mass` - Optional physical measurements
/// - `hair_color`, `skin_color`, `eye_color`, `birth_year` - Optional descriptive attributes
/// - `gender` - Optional [`Gender`](entity::sea_orm_active_enums::Gender)
pub type CharacterModel = entity::character::Model;

/// Type alias for planet database model.
///
/// # Fields (from `entity::planet::Model`)
/// - `id` - Primary key
/// - `name` - Unique planet name
/// - `diameter`, `population` - Optional integer attributes
/// - `climate`, `terrain`, `gravity` - Optional descriptive attributes
pub type PlanetModel = entity::planet::Model;

/// Type alias for the join record linking a user to a favorite character.
///
/// The pair (`user_id`, `character_id`) is the primary key.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for the join record linking a user to a favorite planet.
///
/// The pair (`user_id`, `planet_id`) is the primary key.
pub type FavoritePlanetModel = entity::favorite_planet::Model;
