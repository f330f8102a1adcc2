use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::FavoritePlanetModel;

pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a planet as a favorite of a user
    ///
    /// Fails with a database error if the pair already exists or if either the user
    /// or the planet does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, DbErr> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
        };

        favorite.insert(self.db).await
    }

    pub async fn get(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavoritePlanet::find_by_id((user_id, planet_id))
            .one(self.db)
            .await
    }

    /// Gets every favorite planet record of a user, ordered by planet ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::PlanetId)
            .all(self.db)
            .await
    }

    /// Removes a planet from a user's favorites
    ///
    /// Check [`DeleteResult::rows_affected`] to find out whether the favorite existed.
    pub async fn delete(&self, user_id: i32, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_by_id((user_id, planet_id))
            .exec(self.db)
            .await
    }
}
