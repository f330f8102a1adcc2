//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers, type aliases
//! for the database entity models, and the `serialize()` views of each record.

pub mod app;
pub mod db;
pub mod record;
