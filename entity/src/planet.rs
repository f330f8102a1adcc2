use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub name: String,
    pub diameter: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub climate: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub terrain: Option<String>,
    pub population: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub gravity: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
}

impl Related<super::favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanet.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_planet::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_planet::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Planet {}>", self.name)
    }
}
