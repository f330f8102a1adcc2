//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one per table.
//! They return `sea_orm::DbErr` untouched: uniqueness and foreign key violations are
//! reported by the database engine and left for callers to interpret.

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;
