use entity::sea_orm_active_enums::Gender;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    /// One of `male`, `female`, `n/a`, `hermaphrodite`
    #[schema(value_type = Option<String>, example = "male")]
    pub gender: Option<Gender>,
}

/// Request body for creating a character.
///
/// Every attribute besides the name is optional. An unknown `gender` value is
/// rejected when the body is deserialized.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    pub name: String,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    #[schema(value_type = Option<String>, example = "male")]
    pub gender: Option<Gender>,
}
