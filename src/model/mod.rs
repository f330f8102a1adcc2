//! API data transfer objects shared by controllers and services.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
