//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; the router only binds them
//! to a shared client.

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::swapi::SwapiClient;

use super::definitions::{
    CharacterByIdTool, SearchCharactersTool, SearchFilmsTool, SearchPlanetsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: SwapiClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchCharactersTool::create_route(client.clone()))
        .with_route(SearchPlanetsTool::create_route(client.clone()))
        .with_route(SearchFilmsTool::create_route(client.clone()))
        .with_route(CharacterByIdTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SwapiConfig;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let client = SwapiClient::new(SwapiConfig::default()).unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(client);
        let tools = router.list_all();
        assert_eq!(tools.len(), 4);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"search_characters"));
        assert!(names.contains(&"search_planets"));
        assert!(names.contains(&"search_films"));
        assert!(names.contains(&"search_characters_byId"));
    }
}
