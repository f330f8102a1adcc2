use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gender of a character, stored as the `gender_enum` database type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "gender_enum")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    #[serde(rename = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    #[serde(rename = "female")]
    Female,
    #[sea_orm(string_value = "n/a")]
    #[serde(rename = "n/a")]
    NotApplicable,
    #[sea_orm(string_value = "hermaphrodite")]
    #[serde(rename = "hermaphrodite")]
    Hermaphrodite,
}

impl Gender {
    /// The value stored in the database and used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NotApplicable => "n/a",
            Gender::Hermaphrodite => "hermaphrodite",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
