//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate so fixtures and tests
//! read the same way on both sides.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for Star Wars character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for favorite character join record.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for favorite planet join record.
pub type FavoritePlanetModel = entity::favorite_planet::Model;
