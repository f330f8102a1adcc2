use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("User ID {0:?} not found")]
    UserNotFound(i32),
    #[error("Character ID {0:?} not found")]
    CharacterNotFound(i32),
    #[error("Planet ID {0:?} not found")]
    PlanetNotFound(i32),
    #[error("User ID {user_id:?} has not favorited {kind} ID {id:?}")]
    FavoriteNotFound {
        user_id: i32,
        kind: &'static str,
        id: i32,
    },
    #[error("User ID {user_id:?} has already favorited {kind} ID {id:?}")]
    AlreadyFavorited {
        user_id: i32,
        kind: &'static str,
        id: i32,
    },
}

impl ResourceError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => Self::not_found("User not found"),
            Self::CharacterNotFound(_) => Self::not_found("Character not found"),
            Self::PlanetNotFound(_) => Self::not_found("Planet not found"),
            Self::FavoriteNotFound { .. } => Self::not_found("Favorite not found"),
            Self::AlreadyFavorited { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Already a favorite".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
