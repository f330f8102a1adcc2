use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{error::Error, model::app::AppState, service::character::CharacterService},
};

pub static PEOPLE_TAG: &str = "people";

/// List all characters
#[utoipa::path(
    get,
    path = "/api/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let characters = character_service.get_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/api/people/{character_id}",
    tag = PEOPLE_TAG,
    params(
        ("character_id" = i32, Path, description = "ID of the character"),
    ),
    responses(
        (status = 200, description = "Success when retrieving character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let character = character_service.get_character(character_id).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Add a character
///
/// `gender` must be one of `male`, `female`, `n/a` or `hermaphrodite` when provided,
/// any other value is rejected before reaching the database.
#[utoipa::path(
    post,
    path = "/api/people",
    tag = PEOPLE_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 409, description = "A character with this name already exists", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let character = character_service.create_character(payload).await?;

    Ok((StatusCode::CREATED, Json(character)))
}
