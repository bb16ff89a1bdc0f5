//! Film search tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use super::common::{SearchParams, parse_params, run_search};
use crate::domains::swapi::{Collection, Film, SwapiClient};

/// Search films tool. Matches against film titles.
#[derive(Debug, Clone)]
pub struct SearchFilmsTool;

impl SearchFilmsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_films";

    pub const TITLE: &'static str = "Search films Star Wars";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search films Star Wars, in API by title";

    pub const OPERATION: &'static str = "Films search";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(search = %params.search))]
    pub async fn execute(params: &SearchParams, client: &SwapiClient) -> CallToolResult {
        info!("Film search tool called for: {}", params.search);
        run_search::<Film>(client, Collection::Films, &params.search, Self::OPERATION).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(Self::TITLE.into()),
        }
    }

    /// Create a ToolRoute bound to the given client.
    pub fn create_route<S>(client: SwapiClient) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: SearchParams = parse_params(args)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::test_support::{client_for, text_of};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_no_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/films/"))
            .and(query_param("search", "Zz & ?x=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 0, "results": []
            })))
            .mount(&server)
            .await;

        let params = SearchParams {
            search: "Zz & ?x=1".to_string(),
        };
        let text = text_of(&SearchFilmsTool::execute(&params, &client_for(&server)).await);
        assert_eq!(text, "No match found to Zz & ?x=1");
    }

    #[tokio::test]
    async fn test_search_hope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/films/"))
            .and(query_param("search", "Hope"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{
                    "title": "A New Hope",
                    "episode_id": 4,
                    "opening_crawl": "It is a period of civil war.",
                    "director": "George Lucas",
                    "producer": "Gary Kurtz, Rick McCallum",
                    "release_date": "1977-05-25"
                }]
            })))
            .mount(&server)
            .await;

        let params = SearchParams {
            search: "Hope".to_string(),
        };
        let text = text_of(&SearchFilmsTool::execute(&params, &client_for(&server)).await);
        assert!(text.starts_with("Found 1 films:"));
        assert!(text.contains(
            "Title: A New Hope, Episode: 4, Director: George Lucas, \
             Producer: Gary Kurtz, Rick McCallum, Release Date: 1977-05-25"
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_diagnostic() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/films/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let params = SearchParams {
            search: "Jedi".to_string(),
        };
        let text = text_of(&SearchFilmsTool::execute(&params, &client_for(&server)).await);
        assert!(text.starts_with("Error occurred during Films search: Malformed response: "));
    }
}
