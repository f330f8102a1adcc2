use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::{CharacterModel, PlanetModel, UserModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    ///
    /// The password is stored exactly as provided. Fails with a database error if the
    /// email or username is already taken.
    pub async fn create(
        &self,
        email: String,
        username: String,
        password: String,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the characters a user has marked as favorites, ordered by character ID
    ///
    /// Returns an empty list both for users without favorites and for user IDs that
    /// don't exist.
    pub async fn get_favorite_characters(
        &self,
        user_id: i32,
    ) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .inner_join(entity::prelude::FavoriteCharacter)
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the planets a user has marked as favorites, ordered by planet ID
    pub async fn get_favorite_planets(&self, user_id: i32) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .inner_join(entity::prelude::FavoritePlanet)
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field. Fails while the user still
    /// has favorites, as no cascade is defined.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
