use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::UserFavoritesDto,
        user::{CreateUserDto, UserDto},
    },
    server::{error::Error, model::app::AppState, service::user::UserService},
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Create a user
///
/// The password is stored as provided and never returned.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 409, description = "Email or username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get the characters and planets a user has marked as favorites
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/favorites",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
    ),
    responses(
        (status = 200, description = "Success when retrieving favorites", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let favorites = user_service.get_favorites(user_id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}
