//! Service layer.
//!
//! Services coordinate repositories, check that referenced records exist, and convert
//! database records into their public views for the controllers.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
