use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::Gender;
use holocron::{
    model::character::{CharacterDto, CreateCharacterDto},
    server::controller::character::{create_person, get_people, get_person},
};

use super::*;

mod get_people {
    use super::*;

    /// Expect 200 OK with every character
    #[tokio::test]
    async fn returns_all_characters() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_character("Luke Skywalker")
            .with_mock_character("Leia Organa")
            .build()
            .await?;

        let resp = get_people(State(test.into_app_state()))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let people: Vec<CharacterDto> = json_body(resp).await;
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Luke Skywalker");
        assert_eq!(people[1].name, "Leia Organa");

        Ok(())
    }
}

mod get_person {
    use super::*;

    /// Expect 200 OK with the serialized character view
    #[tokio::test]
    async fn returns_character() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_character("Luke Skywalker")
            .build()
            .await?;

        let resp = get_person(State(test.into_app_state()), Path(1))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = json_body(resp).await;
        let object = body.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["gender", "height", "id", "mass", "name"]);
        assert_eq!(body["gender"], "male");

        Ok(())
    }

    /// Expect missing attributes to serialize as null rather than be omitted
    #[tokio::test]
    async fn returns_nulls_for_missing_attributes() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let character = test.character().insert_bare_character("Unknown").await?;

        let resp = get_person(State(test.into_app_state()), Path(character.id))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = json_body(resp).await;
        assert!(body["height"].is_null());
        assert!(body["mass"].is_null());
        assert!(body["gender"].is_null());
        assert_eq!(body.as_object().unwrap().len(), 5);

        Ok(())
    }

    /// Expect 404 Not Found for an unknown character
    #[tokio::test]
    async fn not_found_for_unknown_character() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let result = get_person(State(test.into_app_state()), Path(7)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_person {
    use super::*;

    /// Expect 201 Created with a null gender when none is provided
    #[tokio::test]
    async fn creates_character_without_optional_fields() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let payload = CreateCharacterDto {
            name: "R2-D2".to_string(),
            ..Default::default()
        };
        let resp = create_person(State(test.into_app_state()), Json(payload))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = json_body(resp).await;
        assert_eq!(body["name"], "R2-D2");
        assert!(body["gender"].is_null());
        assert!(body["height"].is_null());

        Ok(())
    }

    /// Expect 201 Created storing the `n/a` gender
    #[tokio::test]
    async fn creates_character_with_gender() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let payload = CreateCharacterDto {
            name: "C-3PO".to_string(),
            height: Some(167.0),
            gender: Some(Gender::NotApplicable),
            ..Default::default()
        };
        let resp = create_person(State(test.into_app_state()), Json(payload))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let character: CharacterDto = json_body(resp).await;
        assert_eq!(character.gender, Some(Gender::NotApplicable));
        assert_eq!(character.height, Some(167.0));

        Ok(())
    }

    /// Expect 409 Conflict when the name is already taken
    #[tokio::test]
    async fn conflict_on_duplicate_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_character("Yoda")
            .build()
            .await?;

        let payload = CreateCharacterDto {
            name: "Yoda".to_string(),
            ..Default::default()
        };
        let result = create_person(State(test.into_app_state()), Json(payload)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}
