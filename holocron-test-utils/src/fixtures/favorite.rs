//! Favorite join record fixture utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, PlanetModel, UserModel},
    TestContext,
};

impl TestContext {
    /// Access favorite fixture helpers.
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Mark a character as a favorite of a user.
    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        Ok(entity::prelude::FavoriteCharacter::insert(
            entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Mark a planet as a favorite of a user.
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(
            entity::prelude::FavoritePlanet::insert(entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user along with a character they have marked as a favorite.
    ///
    /// # Returns
    /// - `Ok((UserModel, CharacterModel, FavoriteCharacterModel))` - All three inserted records
    /// - `Err(TestError::DbErr)` - Any insert failed
    pub async fn insert_user_with_favorite_character(
        &self,
        username: &str,
        character_name: &str,
    ) -> Result<(UserModel, CharacterModel, FavoriteCharacterModel), TestError> {
        let user = self.setup.user().insert_mock_user(username).await?;
        let character = self
            .setup
            .character()
            .insert_mock_character(character_name)
            .await?;
        let favorite = self
            .insert_favorite_character(user.id, character.id)
            .await?;

        Ok((user, character, favorite))
    }

    /// Insert a user along with a planet they have marked as a favorite.
    pub async fn insert_user_with_favorite_planet(
        &self,
        username: &str,
        planet_name: &str,
    ) -> Result<(UserModel, PlanetModel, FavoritePlanetModel), TestError> {
        let user = self.setup.user().insert_mock_user(username).await?;
        let planet = self.setup.planet().insert_mock_planet(planet_name).await?;
        let favorite = self.insert_favorite_planet(user.id, planet.id).await?;

        Ok((user, planet, favorite))
    }
}
