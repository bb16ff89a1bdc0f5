//! Text rendering for SWAPI entities and failures.
//!
//! Each entity kind renders to one fixed-field line through `Display`.
//! Listings join those lines with [`ENTRY_DELIMITER`] under a count header.

use std::fmt;

use tracing::error;

use super::error::SwapiError;
use super::models::{Character, Film, Planet};

/// Separator placed between rendered entities in a listing.
pub const ENTRY_DELIMITER: &str = "\n~~~~\n\n";

/// Substituted when a failure carries no usable message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// An entity kind that can appear in a search listing.
pub trait Listing: fmt::Display {
    /// Plural label used in the `Found N <label>:` header.
    const PLURAL: &'static str;
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Height: {}, Mass: {}, Birth Year: {}, Gender: {}, Eye Color: {}, Hair Color: {}, Skin Color: {}",
            self.name,
            self.height,
            self.mass,
            self.birth_year,
            self.gender,
            self.eye_color,
            self.hair_color,
            self.skin_color
        )
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Diameter: {}, Population: {}, Climate: {}, Terrain: {}, Gravity: {}",
            self.name, self.diameter, self.population, self.climate, self.terrain, self.gravity
        )
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Episode: {}, Director: {}, Producer: {}, Release Date: {}",
            self.title, self.episode_id, self.director, self.producer, self.release_date
        )
    }
}

impl Listing for Character {
    const PLURAL: &'static str = "characters";
}

impl Listing for Planet {
    const PLURAL: &'static str = "planets";
}

impl Listing for Film {
    const PLURAL: &'static str = "films";
}

fn join_entries<T: fmt::Display>(entries: &[T]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(ENTRY_DELIMITER)
}

/// Message returned when a search matches nothing.
pub fn no_match_message(term: &str) -> String {
    format!("No match found to {}", term)
}

/// Render a page of search results under a `Found N <kind>:` header.
pub fn format_search_results<T: Listing>(results: &[T]) -> String {
    format!(
        "Found {} {}:\n\n{}",
        results.len(),
        T::PLURAL,
        join_entries(results)
    )
}

/// Render a single character fetched by id.
pub fn format_character(character: &Character) -> String {
    format!("Character found:\n\n {}", character)
}

/// Render the whole film collection ordered by episode number.
///
/// The sort is stable, so films sharing an episode keep the remote's order.
pub fn format_film_catalog(mut films: Vec<Film>) -> String {
    films.sort_by_key(|film| film.episode_id);
    format!(
        "Found {} films, ordered by episode:\n\n{}",
        films.len(),
        join_entries(&films)
    )
}

/// Turn a failed operation into the diagnostic text shown to the caller.
pub fn describe_failure(operation: &str, err: &SwapiError) -> String {
    error!("Error in {}: {:?}", operation, err);

    let message = err.to_string();
    let message = if message.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        message.as_str()
    };

    format!("Error occurred during {}: {}", operation, message)
}
