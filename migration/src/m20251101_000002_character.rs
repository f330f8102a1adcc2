use sea_orm_migration::{prelude::extension::postgres::Type, prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Gender::Enum)
                    .values([
                        Gender::Male,
                        Gender::Female,
                        Gender::NotApplicable,
                        Gender::Hermaphrodite,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len_uniq(Character::Name, 100))
                    .col(double_null(Character::Height))
                    .col(double_null(Character::Mass))
                    .col(string_len_null(Character::HairColor, 50))
                    .col(string_len_null(Character::SkinColor, 50))
                    .col(string_len_null(Character::EyeColor, 50))
                    .col(string_len_null(Character::BirthYear, 50))
                    .col(enumeration_null(
                        Character::Gender,
                        Gender::Enum,
                        [
                            Gender::Male,
                            Gender::Female,
                            Gender::NotApplicable,
                            Gender::Hermaphrodite,
                        ],
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Gender::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
}

#[derive(DeriveIden)]
enum Gender {
    #[sea_orm(iden = "gender_enum")]
    Enum,
    #[sea_orm(iden = "male")]
    Male,
    #[sea_orm(iden = "female")]
    Female,
    #[sea_orm(iden = "n/a")]
    NotApplicable,
    #[sea_orm(iden = "hermaphrodite")]
    Hermaphrodite,
}
