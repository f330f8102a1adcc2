use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        favorite::UserFavoritesDto,
        user::{CreateUserDto, UserDto},
    },
    server::controller::user::{create_user, get_user_favorites, get_users},
};

use super::*;

fn create_user_dto(email: &str, username: &str) -> CreateUserDto {
    CreateUserDto {
        email: email.to_string(),
        username: username.to_string(),
        password: "hunter2".to_string(),
    }
}

mod get_users {
    use super::*;

    /// Expect 200 OK with every user
    #[tokio::test]
    async fn returns_all_users() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_user("leia")
            .build()
            .await?;

        let result = get_users(State(test.into_app_state())).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let users: Vec<UserDto> = json_body(resp).await;
        let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(usernames, vec!["luke", "leia"]);

        Ok(())
    }

    /// Expect 200 OK with an empty list when no users exist
    #[tokio::test]
    async fn returns_empty_list() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let resp = get_users(State(test.into_app_state()))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let users: Vec<UserDto> = json_body(resp).await;
        assert!(users.is_empty());

        Ok(())
    }

    /// Expect 500 Internal Server Error when the user table is missing
    #[tokio::test]
    async fn fails_when_tables_missing() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = get_users(State(test.into_app_state())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod create_user {
    use super::*;

    /// Expect 201 Created with the public user view
    #[tokio::test]
    async fn creates_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let result = create_user(
            State(test.into_app_state()),
            Json(create_user_dto("luke@holonet.test", "luke")),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = json_body(resp).await;
        assert_eq!(body["username"], "luke");
        assert_eq!(body["email"], "luke@holonet.test");
        assert!(body.get("password").is_none());
        assert!(body.get("is_active").is_none());

        Ok(())
    }

    /// Expect 409 Conflict when the username is already taken
    #[tokio::test]
    async fn conflict_on_duplicate_username() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .build()
            .await?;

        let result = create_user(
            State(test.into_app_state()),
            Json(create_user_dto("other@holonet.test", "luke")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 409 Conflict when both email and username belong to an existing user
    #[tokio::test]
    async fn conflict_on_existing_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.user().insert_user("han@holonet.test", "han").await?;

        let result = create_user(
            State(test.into_app_state()),
            Json(create_user_dto("han@holonet.test", "han")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 409 Conflict when the email is already taken
    #[tokio::test]
    async fn conflict_on_duplicate_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .build()
            .await?;

        let result = create_user(
            State(test.into_app_state()),
            Json(create_user_dto("luke@holonet.test", "skywalker")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}

mod get_user_favorites {
    use super::*;

    /// Expect 200 OK with favorite characters and planets
    #[tokio::test]
    async fn returns_favorites() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_character("Yoda")
            .with_mock_character("Obi-Wan Kenobi")
            .with_mock_planet("Dagobah")
            .with_favorite_character(1, 2)
            .with_favorite_planet(1, 1)
            .build()
            .await?;

        let resp = get_user_favorites(State(test.into_app_state()), Path(1))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let favorites: UserFavoritesDto = json_body(resp).await;
        assert_eq!(favorites.characters.len(), 1);
        assert_eq!(favorites.characters[0].name, "Obi-Wan Kenobi");
        assert_eq!(favorites.planets.len(), 1);
        assert_eq!(favorites.planets[0].name, "Dagobah");

        Ok(())
    }

    /// Expect favorites of other users to be excluded
    #[tokio::test]
    async fn excludes_other_users_favorites() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let (luke, yoda, _) = test
            .favorite()
            .insert_user_with_favorite_character("luke", "Yoda")
            .await?;
        let (leia, alderaan, _) = test
            .favorite()
            .insert_user_with_favorite_planet("leia", "Alderaan")
            .await?;

        let resp = get_user_favorites(State(test.into_app_state()), Path(luke.id))
            .await
            .unwrap()
            .into_response();
        let favorites: UserFavoritesDto = json_body(resp).await;
        assert_eq!(favorites.characters.len(), 1);
        assert_eq!(favorites.characters[0].id, yoda.id);
        assert!(favorites.planets.is_empty());

        let resp = get_user_favorites(State(test.into_app_state()), Path(leia.id))
            .await
            .unwrap()
            .into_response();
        let favorites: UserFavoritesDto = json_body(resp).await;
        assert!(favorites.characters.is_empty());
        assert_eq!(favorites.planets.len(), 1);
        assert_eq!(favorites.planets[0].id, alderaan.id);

        Ok(())
    }

    /// Expect 200 OK with empty lists for a user without favorites
    #[tokio::test]
    async fn returns_empty_favorites() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .build()
            .await?;

        let resp = get_user_favorites(State(test.into_app_state()), Path(1))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let favorites: UserFavoritesDto = json_body(resp).await;
        assert!(favorites.characters.is_empty());
        assert!(favorites.planets.is_empty());

        Ok(())
    }

    /// Expect 404 Not Found for an unknown user
    #[tokio::test]
    async fn not_found_for_unknown_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let result = get_user_favorites(State(test.into_app_state()), Path(42)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
