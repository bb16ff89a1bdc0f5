//! All-films resource definition.

use rmcp::model::ResourceContents;
use tracing::{info, instrument};

use super::{ResourceDefinition, ResourceSource};
use crate::domains::swapi::SwapiClient;
use crate::domains::swapi::format::{describe_failure, format_film_catalog};

/// Every film in the collection, ordered by episode number.
pub struct AllFilmsResource;

impl AllFilmsResource {
    /// Label used in diagnostics.
    pub const OPERATION: &'static str = "All films listing";

    /// Fetch, sort, and render the film collection.
    ///
    /// A remote failure is rendered into the content at this resource's URI
    /// instead of failing the read.
    #[instrument(skip_all)]
    pub async fn read(client: &SwapiClient) -> ResourceContents {
        let text = match client.films().await {
            Ok(page) => {
                info!("Rendering {} film(s)", page.results.len());
                format_film_catalog(page.results)
            }
            Err(e) => describe_failure(Self::OPERATION, &e),
        };

        ResourceContents::TextResourceContents {
            uri: Self::URI.to_string(),
            mime_type: Some(Self::MIME_TYPE.to_string()),
            text,
            meta: None,
        }
    }
}

impl ResourceDefinition for AllFilmsResource {
    const URI: &'static str = "swapi://films";
    const NAME: &'static str = "All Star Wars films";
    const DESCRIPTION: &'static str = "Every Star Wars film from the API, ordered by episode number";
    const MIME_TYPE: &'static str = "text/plain";

    fn source() -> ResourceSource {
        ResourceSource::AllFilms
    }
}
