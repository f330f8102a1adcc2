use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::{model::character::CreateCharacterDto, server::model::db::CharacterModel};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// Fails with a database error if a character with the same name already exists.
    pub async fn create(&self, character: CreateCharacterDto) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            height: ActiveValue::Set(character.height),
            mass: ActiveValue::Set(character.mass),
            hair_color: ActiveValue::Set(character.hair_color),
            skin_color: ActiveValue::Set(character.skin_color),
            eye_color: ActiveValue::Set(character.eye_color),
            birth_year: ActiveValue::Set(character.birth_year),
            gender: ActiveValue::Set(character.gender),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets all characters ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a character
    ///
    /// Check [`DeleteResult::rows_affected`] to confirm a row was removed.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
