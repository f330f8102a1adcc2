//! User fixture utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    /// Access user fixture helpers.
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the given username.
    ///
    /// The email is derived from the username (`{username}@holonet.test`) so
    /// fixtures with distinct usernames never collide on the unique email column.
    ///
    /// # Arguments
    /// - `username` - Unique username for the user
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The inserted active user
    /// - `Err(TestError::DbErr)` - Insert failed (e.g. table missing or duplicate username)
    pub async fn insert_mock_user(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user(&format!("{}@holonet.test", username), username)
            .await
    }

    /// Insert a user with explicit email and username.
    pub async fn insert_user(&self, email: &str, username: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                username: ActiveValue::Set(username.to_string()),
                password: ActiveValue::Set("password".to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
