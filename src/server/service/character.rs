use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, CreateCharacterDto},
    server::{
        data::character::CharacterRepository,
        error::{resource::ResourceError, Error},
        model::record::SerializeRecord,
    },
};

/// Service for browsing and adding Star Wars characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of CharacterService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The created character's public view
    /// - `Err(Error::DbErr)` - Name already taken, or database failure
    pub async fn create_character(
        &self,
        character: CreateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo.create(character).await?;

        tracing::debug!(character_id = %character.id, "Created {}", character);

        Ok(character.serialize())
    }

    /// Retrieves a single character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::ResourceError)` - Character does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.get_by_id(character_id).await? {
            Some(character) => Ok(character.serialize()),
            None => Err(ResourceError::CharacterNotFound(character_id).into()),
        }
    }

    /// Lists every character ordered by ID.
    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let characters = character_repo.get_all().await?;

        Ok(characters.iter().map(SerializeRecord::serialize).collect())
    }
}
