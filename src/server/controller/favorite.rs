use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{FavoriteCharacterDto, FavoritePlanetDto},
    },
    server::{error::Error, model::app::AppState, service::favorite::FavoriteService},
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorite/people/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("character_id" = i32, Path, description = "ID of the character"),
    ),
    responses(
        (status = 201, description = "Favorite added", body = FavoriteCharacterDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 409, description = "Character is already a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorite = favorite_service
        .add_favorite_character(user_id, character_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorite/people/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("character_id" = i32, Path, description = "ID of the character"),
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_favorite_character(user_id, character_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet"),
    ),
    responses(
        (status = 201, description = "Favorite added", body = FavoritePlanetDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 409, description = "Planet is already a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorite = favorite_service
        .add_favorite_planet(user_id, planet_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet"),
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_favorite_planet(user_id, planet_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
