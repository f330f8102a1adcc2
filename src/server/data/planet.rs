use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::{model::planet::CreatePlanetDto, server::model::db::PlanetModel};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    ///
    /// Fails with a database error if a planet with the same name already exists.
    pub async fn create(&self, planet: CreatePlanetDto) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            diameter: ActiveValue::Set(planet.diameter),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            population: ActiveValue::Set(planet.population),
            gravity: ActiveValue::Set(planet.gravity),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets all planets ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a planet
    ///
    /// Check [`DeleteResult::rows_affected`] to confirm a row was removed.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
