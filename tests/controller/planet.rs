use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::controller::planet::{create_planet, get_planet, get_planets},
};

use super::*;

mod get_planets {
    use super::*;

    /// Expect 200 OK with every planet
    #[tokio::test]
    async fn returns_all_planets() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_planet("Tatooine")
            .with_mock_planet("Hoth")
            .build()
            .await?;

        let resp = get_planets(State(test.into_app_state()))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let planets: Vec<PlanetDto> = json_body(resp).await;
        let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Tatooine", "Hoth"]);

        Ok(())
    }
}

mod get_planet {
    use super::*;

    /// Expect 200 OK with exactly the public planet fields
    #[tokio::test]
    async fn returns_planet() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_planet("Tatooine")
            .build()
            .await?;

        let resp = get_planet(State(test.into_app_state()), Path(1))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = json_body(resp).await;
        let object = body.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["climate", "diameter", "id", "name", "population"]
        );
        assert_eq!(body["diameter"], 10465);

        Ok(())
    }

    /// Expect 404 Not Found for an unknown planet
    #[tokio::test]
    async fn not_found_for_unknown_planet() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let result = get_planet(State(test.into_app_state()), Path(3)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_planet {
    use super::*;

    /// Expect 201 Created with the new planet
    #[tokio::test]
    async fn creates_planet() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let payload = CreatePlanetDto {
            name: "Hoth".to_string(),
            diameter: Some(7200),
            climate: Some("frozen".to_string()),
            ..Default::default()
        };
        let resp = create_planet(State(test.into_app_state()), Json(payload))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let planet: PlanetDto = json_body(resp).await;
        assert_eq!(planet.name, "Hoth");
        assert_eq!(planet.diameter, Some(7200));
        assert_eq!(planet.population, None);

        Ok(())
    }

    /// Expect 409 Conflict when the name is already taken
    #[tokio::test]
    async fn conflict_on_duplicate_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_planet("Hoth")
            .build()
            .await?;

        let payload = CreatePlanetDto {
            name: "Hoth".to_string(),
            ..Default::default()
        };
        let result = create_planet(State(test.into_app_state()), Json(payload)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}
