//! Typed views of the SWAPI payloads.
//!
//! Only the fields that are rendered are declared. Anything else the remote
//! sends (URLs of related entities, timestamps) is ignored by serde, while a
//! missing or mistyped declared field fails decoding.

use serde::Deserialize;

/// A person from `/people/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub birth_year: String,
    pub gender: String,
    pub eye_color: String,
    pub hair_color: String,
    pub skin_color: String,
}

/// A planet from `/planets/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Planet {
    pub name: String,
    pub diameter: String,
    pub population: String,
    pub climate: String,
    pub terrain: String,
    pub gravity: String,
}

/// A film from `/films/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: u32,
    pub director: String,
    pub producer: String,
    pub release_date: String,
}

/// First page of a collection or search listing.
///
/// `next` and `previous` are decoded so callers can tell a page is partial,
/// but they are never followed.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> SearchPage<T> {
    /// Whether the page holds no entities.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Error body returned alongside non-success statuses, e.g. `{"detail": "Not found"}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_ignores_unknown_fields() {
        let json = r#"{
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/"]
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.name, "Luke Skywalker");
        assert_eq!(character.birth_year, "19BBY");
    }

    #[test]
    fn test_film_requires_numeric_episode() {
        let json = r#"{
            "title": "A New Hope",
            "episode_id": "four",
            "director": "George Lucas",
            "producer": "Gary Kurtz, Rick McCallum",
            "release_date": "1977-05-25"
        }"#;
        assert!(serde_json::from_str::<Film>(json).is_err());
    }

    #[test]
    fn test_planet_missing_field_is_rejected() {
        let json = r#"{"name": "Tatooine", "diameter": "10465"}"#;
        assert!(serde_json::from_str::<Planet>(json).is_err());
    }

    #[test]
    fn test_search_page_without_links() {
        let json = r#"{"count": 0, "results": []}"#;
        let page: SearchPage<Planet> = serde_json::from_str(json).unwrap();
        assert!(page.is_empty());
        assert!(page.next.is_none());
    }
}
