//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for
//! unit tests of serialization and DTO conversion.

use entity::sea_orm_active_enums::Gender;

use crate::model::{
    CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, PlanetModel, UserModel,
};

/// Create a mock user model.
///
/// # Arguments
/// - `id` - Primary key of the user
/// - `username` - Username, also used to derive the email
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        email: format!("{}@holonet.test", username),
        username: username.to_string(),
        password: "password".to_string(),
        is_active: true,
    }
}

/// Create a mock character model with every optional attribute populated.
pub fn mock_character_model(id: i32, name: &str) -> CharacterModel {
    CharacterModel {
        id,
        name: name.to_string(),
        height: Some(172.0),
        mass: Some(77.0),
        hair_color: Some("blond".to_string()),
        skin_color: Some("fair".to_string()),
        eye_color: Some("blue".to_string()),
        birth_year: Some("19BBY".to_string()),
        gender: Some(Gender::Male),
    }
}

/// Create a mock planet model with every optional attribute populated.
pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        diameter: Some(10465),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        population: Some(200000),
        gravity: Some("1 standard".to_string()),
    }
}

/// Create a mock favorite character join record.
pub fn mock_favorite_character_model(user_id: i32, character_id: i32) -> FavoriteCharacterModel {
    FavoriteCharacterModel {
        user_id,
        character_id,
    }
}

/// Create a mock favorite planet join record.
pub fn mock_favorite_planet_model(user_id: i32, planet_id: i32) -> FavoritePlanetModel {
    FavoritePlanetModel { user_id, planet_id }
}
