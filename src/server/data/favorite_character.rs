use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::FavoriteCharacterModel;

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a character as a favorite of a user
    ///
    /// Fails with a database error if the pair already exists or if either the user
    /// or the character does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
        };

        favorite.insert(self.db).await
    }

    pub async fn get(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find_by_id((user_id, character_id))
            .one(self.db)
            .await
    }

    /// Gets every favorite character record of a user, ordered by character ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::CharacterId)
            .all(self.db)
            .await
    }

    /// Removes a character from a user's favorites
    ///
    /// Check [`DeleteResult::rows_affected`] to find out whether the favorite existed.
    pub async fn delete(&self, user_id: i32, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_by_id((user_id, character_id))
            .exec(self.db)
            .await
    }
}
