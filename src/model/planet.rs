use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub climate: Option<String>,
    pub population: Option<i32>,
}

/// Request body for creating a planet.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    pub name: String,
    pub diameter: Option<i32>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i32>,
    pub gravity: Option<String>,
}
