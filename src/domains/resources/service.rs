//! Resource service implementation.
//!
//! The ResourceService keeps the registry of available resources and answers
//! read requests by fetching from the remote API through a shared client.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use tracing::info;

use super::definitions::{AllFilmsResource, ResourceSource};
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::swapi::SwapiClient;

/// Service for managing and accessing resources.
pub struct ResourceService {
    client: SwapiClient,

    /// Key: resource URI, Value: resource metadata and source.
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Where the content is read from.
    pub source: ResourceSource,
}

impl ResourceService {
    /// Create a new ResourceService reading through the given client.
    pub fn new(client: SwapiClient) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            client,
            resources: HashMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content: ResourceContents = match entry.source {
            ResourceSource::AllFilms => AllFilmsResource::read(&self.client).await,
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SwapiConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_resource_service_creation() {
        let client = SwapiClient::new(SwapiConfig::default()).unwrap();
        let service = ResourceService::new(client);

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/films/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 0, "next": null, "previous": null, "results": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SwapiClient::new(SwapiConfig::with_base_url(server.uri())).unwrap();
        let service = ResourceService::new(client);

        let result = service.read_resource("swapi://films").await.unwrap();
        assert_eq!(result.contents.len(), 1);
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let client = SwapiClient::new(SwapiConfig::default()).unwrap();
        let service = ResourceService::new(client);

        let result = service.read_resource("swapi://starships").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
