//! Star Wars API domain.
//!
//! - `client`: HTTP access to the remote endpoints
//! - `models`: typed payloads decoded from the remote
//! - `format`: text rendering for entities and failures
//! - `error`: remote failure kinds

pub mod client;
mod error;
pub mod format;
pub mod models;

pub use client::{Collection, SwapiClient};
pub use error::SwapiError;
pub use models::{Character, Film, Planet, SearchPage};
