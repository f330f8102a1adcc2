use serde::{Deserialize, Serialize};

/// Public view of a user account. Never carries the password or active flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// Request body for creating a user.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub username: String,
    /// Stored as given
    pub password: String,
}
