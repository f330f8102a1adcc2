//! Error types for the Holocron server application.
//!
//! Domain errors live in their own modules (configuration, missing or conflicting
//! resources) and are aggregated into [`Error`]. All errors implement `IntoResponse`
//! for Axum HTTP responses and use `thiserror` for `Display` and `Error`.

pub mod config;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, resource::ResourceError},
};

/// Main error type for the Holocron server application.
///
/// Aggregates domain-specific error types and external library errors. `#[from]` enables
/// conversion via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Resource errors (missing users/characters/planets, duplicate favorites)
/// - Database errors, including unique and foreign key constraint violations
/// - I/O errors while binding or serving the HTTP listener
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A requested record does not exist or a favorite already exists.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (listener bind, serve loop).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing users, characters, planets, or favorites
/// - 409 Conflict - For duplicate favorites and database unique/foreign key violations
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);

                    conflict("A record with the same unique value already exists")
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::warn!("Foreign key constraint violation: {}", detail);

                    conflict("The record conflicts with a related record")
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

fn conflict(message: &str) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
