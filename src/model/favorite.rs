use serde::{Deserialize, Serialize};

use crate::model::{character::CharacterDto, planet::PlanetDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteCharacterDto {
    pub user_id: i32,
    pub character_id: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetDto {
    pub user_id: i32,
    pub planet_id: i32,
}

/// Everything a user has marked as a favorite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub characters: Vec<CharacterDto>,
    pub planets: Vec<PlanetDto>,
}
