//! Planet fixture utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::PlanetModel, TestContext};

impl TestContext {
    /// Access planet fixture helpers.
    pub fn planet(&self) -> PlanetFixtures<'_> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PlanetFixtures<'a> {
    /// Insert a planet with standard attributes and the given name.
    ///
    /// # Returns
    /// - `Ok(PlanetModel)` - The inserted planet
    /// - `Err(TestError::DbErr)` - Insert failed (e.g. duplicate name)
    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                diameter: ActiveValue::Set(Some(10465)),
                climate: ActiveValue::Set(Some("arid".to_string())),
                terrain: ActiveValue::Set(Some("desert".to_string())),
                population: ActiveValue::Set(Some(200000)),
                gravity: ActiveValue::Set(Some("1 standard".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
