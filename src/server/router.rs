//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs` with the generated document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in the same `routes!` call so utoipa-axum can
/// attach them to a single method router.
///
/// # Registered Endpoints
/// - `GET|POST /api/users`
/// - `GET /api/users/{user_id}/favorites`
/// - `GET|POST /api/people`, `GET /api/people/{character_id}`
/// - `GET|POST /api/planets`, `GET /api/planets/{planet_id}`
/// - `POST|DELETE /api/users/{user_id}/favorite/people/{character_id}`
/// - `POST|DELETE /api/users/{user_id}/favorite/planet/{planet_id}`
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::PEOPLE_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::character::get_people,
            controller::character::create_person
        ))
        .routes(routes!(controller::character::get_person))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
