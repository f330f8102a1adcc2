//! Plain key/value views of database records.
//!
//! Each record exposes a `serialize()` view containing only its public fields. The views
//! are the DTOs returned by the API, so a record is never sent over the wire with fields
//! such as the user's password.

use serde::Serialize;

use crate::{
    model::{
        character::CharacterDto,
        favorite::{FavoriteCharacterDto, FavoritePlanetDto},
        planet::PlanetDto,
        user::UserDto,
    },
    server::model::db::{
        CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, PlanetModel, UserModel,
    },
};

/// A database record with a public key/value view.
pub trait SerializeRecord {
    /// The view produced by [`SerializeRecord::serialize`]
    type Record: Serialize;

    /// Produces the public view of this record. Pure, never touches the database.
    fn serialize(&self) -> Self::Record;
}

impl SerializeRecord for UserModel {
    type Record = UserDto;

    fn serialize(&self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

impl SerializeRecord for CharacterModel {
    type Record = CharacterDto;

    fn serialize(&self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name.clone(),
            height: self.height,
            mass: self.mass,
            gender: self.gender,
        }
    }
}

impl SerializeRecord for PlanetModel {
    type Record = PlanetDto;

    fn serialize(&self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name.clone(),
            diameter: self.diameter,
            climate: self.climate.clone(),
            population: self.population,
        }
    }
}

impl SerializeRecord for FavoriteCharacterModel {
    type Record = FavoriteCharacterDto;

    fn serialize(&self) -> FavoriteCharacterDto {
        FavoriteCharacterDto {
            user_id: self.user_id,
            character_id: self.character_id,
        }
    }
}

impl SerializeRecord for FavoritePlanetModel {
    type Record = FavoritePlanetDto;

    fn serialize(&self) -> FavoritePlanetDto {
        FavoritePlanetDto {
            user_id: self.user_id,
            planet_id: self.planet_id,
        }
    }
}
