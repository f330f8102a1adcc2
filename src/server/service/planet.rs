use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{
        data::planet::PlanetRepository,
        error::{resource::ResourceError, Error},
        model::record::SerializeRecord,
    },
};

/// Service for browsing and adding planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The created planet's public view
    /// - `Err(Error::DbErr)` - Name already taken, or database failure
    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo.create(planet).await?;

        tracing::debug!(planet_id = %planet.id, "Created {}", planet);

        Ok(planet.serialize())
    }

    /// Retrieves a single planet.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet found
    /// - `Err(Error::ResourceError)` - Planet does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo
            .get_by_id(planet_id)
            .await?
            .ok_or(ResourceError::PlanetNotFound(planet_id))?;

        Ok(planet.serialize())
    }

    /// Lists every planet ordered by ID.
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.iter().map(SerializeRecord::serialize).collect())
    }
}
