use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{error::Error, model::app::AppState, service::planet::PlanetService},
};

pub static PLANET_TAG: &str = "planet";

/// List all planets
#[utoipa::path(
    get,
    path = "/api/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/api/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet"),
    ),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).get_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Add a planet
#[utoipa::path(
    post,
    path = "/api/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 409, description = "A planet with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).create_planet(payload).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}
