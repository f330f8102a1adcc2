//! Database entities for Holocron.
//!
//! Users, Star Wars characters and planets, and the two join tables linking
//! users to their favorite characters and planets.

pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod sea_orm_active_enums;
pub mod user;
