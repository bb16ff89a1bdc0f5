//! Planet search tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use super::common::{SearchParams, parse_params, run_search};
use crate::domains::swapi::{Collection, Planet, SwapiClient};

/// Search planets tool.
#[derive(Debug, Clone)]
pub struct SearchPlanetsTool;

impl SearchPlanetsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_planets";

    pub const TITLE: &'static str = "Search planets Star Wars";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search planets Star Wars, in API by name";

    pub const OPERATION: &'static str = "Planets search";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(search = %params.search))]
    pub async fn execute(params: &SearchParams, client: &SwapiClient) -> CallToolResult {
        info!("Planet search tool called for: {}", params.search);
        run_search::<Planet>(client, Collection::Planets, &params.search, Self::OPERATION).await
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
