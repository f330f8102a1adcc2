use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000002_character::Character};

static PK_FAVORITE_CHARACTER: &str = "pk-favorite_character";
static IDX_FAVORITE_CHARACTER_CHARACTER_ID: &str = "idx-favorite_character-character_id";
static FK_FAVORITE_CHARACTER_USER_ID: &str = "fk-favorite_character-user_id";
static FK_FAVORITE_CHARACTER_CHARACTER_ID: &str = "fk-favorite_character-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacter::Table)
                    .if_not_exists()
                    .col(integer(FavoriteCharacter::UserId))
                    .col(integer(FavoriteCharacter::CharacterId))
                    .primary_key(
                        Index::create()
                            .name(PK_FAVORITE_CHARACTER)
                            .col(FavoriteCharacter::UserId)
                            .col(FavoriteCharacter::CharacterId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTER_CHARACTER_ID)
                    .table(FavoriteCharacter::Table)
                    .col(FavoriteCharacter::CharacterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTER_USER_ID)
                    .from_tbl(FavoriteCharacter::Table)
                    .from_col(FavoriteCharacter::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTER_CHARACTER_ID)
                    .from_tbl(FavoriteCharacter::Table)
                    .from_col(FavoriteCharacter::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_CHARACTER_CHARACTER_ID)
                    .table(FavoriteCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_CHARACTER_USER_ID)
                    .table(FavoriteCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_CHARACTER_CHARACTER_ID)
                    .table(FavoriteCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacter {
    Table,
    UserId,
    CharacterId,
}
