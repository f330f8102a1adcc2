//! Holocron: a backend for browsing Star Wars characters and planets and keeping
//! per-user lists of favorites.

pub mod model;
pub mod server;
