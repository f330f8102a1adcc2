use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::favorite::{FavoriteCharacterDto, FavoritePlanetDto},
    server::{
        controller::favorite::{
            add_favorite_person, add_favorite_planet, remove_favorite_person,
            remove_favorite_planet,
        },
        data::{
            favorite_character::FavoriteCharacterRepository,
            favorite_planet::FavoritePlanetRepository,
        },
    },
};

use super::*;

mod add_favorite_person {
    use super::*;

    /// Expect 201 Created and the join record persisted
    #[tokio::test]
    async fn adds_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_character("Yoda")
            .build()
            .await?;

        let resp = add_favorite_person(State(test.into_app_state()), Path((1, 1)))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let favorite: FavoriteCharacterDto = json_body(resp).await;
        assert_eq!(
            favorite,
            FavoriteCharacterDto {
                user_id: 1,
                character_id: 1
            }
        );

        let stored = FavoriteCharacterRepository::new(&test.db).get(1, 1).await?;
        assert!(stored.is_some());

        Ok(())
    }

    /// Expect 404 Not Found when the user does not exist
    #[tokio::test]
    async fn not_found_for_unknown_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_character("Yoda")
            .build()
            .await?;

        let result = add_favorite_person(State(test.into_app_state()), Path((5, 1))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 404 Not Found when the character does not exist
    #[tokio::test]
    async fn not_found_for_unknown_character() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .build()
            .await?;

        let result = add_favorite_person(State(test.into_app_state()), Path((1, 9))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 409 Conflict when the character is already a favorite
    #[tokio::test]
    async fn conflict_when_already_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_character("Yoda")
            .with_favorite_character(1, 1)
            .build()
            .await?;

        let result = add_favorite_person(State(test.into_app_state()), Path((1, 1))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}

mod remove_favorite_person {
    use super::*;

    /// Expect 204 No Content and the join record removed
    #[tokio::test]
    async fn removes_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_character("Yoda")
            .with_favorite_character(1, 1)
            .build()
            .await?;

        let resp = remove_favorite_person(State(test.into_app_state()), Path((1, 1)))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let stored = FavoriteCharacterRepository::new(&test.db).get(1, 1).await?;
        assert!(stored.is_none());

        Ok(())
    }

    /// Expect 404 Not Found when the favorite does not exist
    #[tokio::test]
    async fn not_found_when_not_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_character("Yoda")
            .build()
            .await?;

        let result = remove_favorite_person(State(test.into_app_state()), Path((1, 1))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod add_favorite_planet {
    use super::*;

    /// Expect 201 Created and the join record persisted
    #[tokio::test]
    async fn adds_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_planet("Tatooine")
            .build()
            .await?;

        let resp = add_favorite_planet(State(test.into_app_state()), Path((1, 1)))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let favorite: FavoritePlanetDto = json_body(resp).await;
        assert_eq!(favorite.user_id, 1);
        assert_eq!(favorite.planet_id, 1);

        let stored = FavoritePlanetRepository::new(&test.db).get(1, 1).await?;
        assert!(stored.is_some());

        Ok(())
    }

    /// Expect 404 Not Found when the planet does not exist
    #[tokio::test]
    async fn not_found_for_unknown_planet() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .build()
            .await?;

        let result = add_favorite_planet(State(test.into_app_state()), Path((1, 2))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 409 Conflict when the planet is already a favorite
    #[tokio::test]
    async fn conflict_when_already_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_planet("Tatooine")
            .with_favorite_planet(1, 1)
            .build()
            .await?;

        let result = add_favorite_planet(State(test.into_app_state()), Path((1, 1))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}

mod remove_favorite_planet {
    use super::*;

    /// Expect 204 No Content and the join record removed
    #[tokio::test]
    async fn removes_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_planet("Tatooine")
            .with_favorite_planet(1, 1)
            .build()
            .await?;

        let resp = remove_favorite_planet(State(test.into_app_state()), Path((1, 1)))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let stored = FavoritePlanetRepository::new(&test.db).get(1, 1).await?;
        assert!(stored.is_none());

        Ok(())
    }

    /// Expect 404 Not Found when the favorite does not exist
    #[tokio::test]
    async fn not_found_when_not_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_user("luke")
            .with_mock_planet("Tatooine")
            .build()
            .await?;

        let result = remove_favorite_planet(State(test.into_app_state()), Path((1, 1))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
