//! Test fixture modules for database record creation.
//!
//! Each submodule provides fixtures for one table family:
//!
//! - `user` - user accounts
//! - `character` - Star Wars characters
//! - `planet` - planets
//! - `favorite` - favorite character and planet join records
//! - `factory` - in-memory models that never touch the database

pub mod character;
pub mod factory;
pub mod favorite;
pub mod planet;
pub mod user;
