use sea_orm::DatabaseConnection;

use crate::{
    model::{
        favorite::UserFavoritesDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::{resource::ResourceError, Error},
        model::record::SerializeRecord,
    },
};

/// Service for managing user accounts and reading their favorites.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user's public view
    /// - `Err(Error::DbErr)` - Email or username already taken, or database failure
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .create(user.email, user.username, user.password)
            .await?;

        tracing::debug!(user_id = %user.id, "Created {}", user);

        Ok(user.serialize())
    }

    /// Lists every user ordered by ID.
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.iter().map(SerializeRecord::serialize).collect())
    }

    /// Retrieves the characters and planets a user has marked as favorites.
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - Favorites, both lists ordered by ID
    /// - `Err(Error::ResourceError)` - User does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        let characters = user_repo.get_favorite_characters(user_id).await?;
        let planets = user_repo.get_favorite_planets(user_id).await?;

        Ok(UserFavoritesDto {
            characters: characters.iter().map(SerializeRecord::serialize).collect(),
            planets: planets.iter().map(SerializeRecord::serialize).collect(),
        })
    }
}
