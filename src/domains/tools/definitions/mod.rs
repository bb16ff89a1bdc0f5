//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod character_by_id;
pub mod characters;
pub mod common;
pub mod films;
pub mod planets;

pub use character_by_id::{CharacterByIdParams, CharacterByIdTool};
pub use characters::SearchCharactersTool;
pub use common::SearchParams;
pub use films::SearchFilmsTool;
pub use planets::SearchPlanetsTool;
