use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Problems reading Holocron's environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `DATABASE_URL` is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed, e.g. a malformed `HOLOCRON_ADDRESS`.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl ConfigError {
    /// Builds a [`ConfigError::InvalidEnvValue`] from the variable name and its parse error.
    pub fn invalid(var: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidEnvValue {
            var: var.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Always rendered as a 500.
impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
