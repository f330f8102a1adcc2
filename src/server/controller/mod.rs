//! HTTP controller endpoints for the Holocron web API.
//!
//! Axum handlers for users, characters ("people"), planets, and favorites. Controllers
//! extract request data, call into services, and return the public record views. Each
//! handler is documented for OpenAPI with utoipa.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
