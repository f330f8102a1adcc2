use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Gender;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub name: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub height: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub mass: Option<f64>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub hair_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub skin_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub eye_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub birth_year: Option<String>,
    pub gender: Option<Gender>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_character::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_character::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Character {}>", self.name)
    }
}
