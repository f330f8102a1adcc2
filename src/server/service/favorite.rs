use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{FavoriteCharacterDto, FavoritePlanetDto},
    server::{
        data::{
            character::CharacterRepository, favorite_character::FavoriteCharacterRepository,
            favorite_planet::FavoritePlanetRepository, planet::PlanetRepository,
            user::UserRepository,
        },
        error::{resource::ResourceError, Error},
        model::record::SerializeRecord,
    },
};

/// Service for adding and removing user favorites.
///
/// The user and the referenced character or planet must exist before the join tables
/// are touched. Two requests racing to add the same favorite still end with the
/// database rejecting the second insert.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a character as a favorite of a user.
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterDto)` - The created favorite
    /// - `Err(Error::ResourceError)` - User or character missing, or already a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterDto, Error> {
        self.ensure_user_exists(user_id).await?;

        if CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::CharacterNotFound(character_id).into());
        }

        let favorite_repo = FavoriteCharacterRepository::new(self.db);

        if favorite_repo.get(user_id, character_id).await?.is_some() {
            return Err(ResourceError::AlreadyFavorited {
                user_id,
                kind: "character",
                id: character_id,
            }
            .into());
        }

        let favorite = favorite_repo.create(user_id, character_id).await?;

        tracing::debug!("Created {}", favorite);

        Ok(favorite.serialize())
    }

    /// Removes a character from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::ResourceError)` - The user had not favorited the character
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<(), Error> {
        let favorite_repo = FavoriteCharacterRepository::new(self.db);

        let result = favorite_repo.delete(user_id, character_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::FavoriteNotFound {
                user_id,
                kind: "character",
                id: character_id,
            }
            .into());
        }

        tracing::debug!(
            user_id = %user_id,
            character_id = %character_id,
            "Removed favorite character"
        );

        Ok(())
    }

    /// Marks a planet as a favorite of a user.
    ///
    /// # Returns
    /// - `Ok(FavoritePlanetDto)` - The created favorite
    /// - `Err(Error::ResourceError)` - User or planet missing, or already a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetDto, Error> {
        self.ensure_user_exists(user_id).await?;

        if PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::PlanetNotFound(planet_id).into());
        }

        let favorite_repo = FavoritePlanetRepository::new(self.db);

        if favorite_repo.get(user_id, planet_id).await?.is_some() {
            return Err(ResourceError::AlreadyFavorited {
                user_id,
                kind: "planet",
                id: planet_id,
            }
            .into());
        }

        let favorite = favorite_repo.create(user_id, planet_id).await?;

        tracing::debug!("Created {}", favorite);

        Ok(favorite.serialize())
    }

    /// Removes a planet from a user's favorites.
    pub async fn remove_favorite_planet(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let favorite_repo = FavoritePlanetRepository::new(self.db);

        let result = favorite_repo.delete(user_id, planet_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::FavoriteNotFound {
                user_id,
                kind: "planet",
                id: planet_id,
            }
            .into());
        }

        tracing::debug!(
            user_id = %user_id,
            planet_id = %planet_id,
            "Removed favorite planet"
        );

        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        match UserRepository::new(self.db).get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ResourceError::UserNotFound(user_id).into()),
        }
    }
}
