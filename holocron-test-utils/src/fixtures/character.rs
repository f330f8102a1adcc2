//! Star Wars character fixture utilities.

use entity::sea_orm_active_enums::Gender;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::CharacterModel, TestContext};

impl TestContext {
    /// Access character fixture helpers.
    pub fn character(&self) -> CharacterFixtures<'_> {
        CharacterFixtures { setup: self }
    }
}

pub struct CharacterFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CharacterFixtures<'a> {
    /// Insert a character with standard physical attributes and the given name.
    ///
    /// # Returns
    /// - `Ok(CharacterModel)` - The inserted character
    /// - `Err(TestError::DbErr)` - Insert failed (e.g. duplicate name)
    pub async fn insert_mock_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set(Some(172.0)),
                mass: ActiveValue::Set(Some(77.0)),
                hair_color: ActiveValue::Set(Some("blond".to_string())),
                skin_color: ActiveValue::Set(Some("fair".to_string())),
                eye_color: ActiveValue::Set(Some("blue".to_string())),
                birth_year: ActiveValue::Set(Some("19BBY".to_string())),
                gender: ActiveValue::Set(Some(Gender::Male)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a character with only a name, every optional attribute left null.
    pub async fn insert_bare_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set(None),
                mass: ActiveValue::Set(None),
                hair_color: ActiveValue::Set(None),
                skin_color: ActiveValue::Set(None),
                eye_color: ActiveValue::Set(None),
                birth_year: ActiveValue::Set(None),
                gender: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
