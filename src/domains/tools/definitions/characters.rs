//! Character search tool.
//!
//! Searches `/people/` by name and lists every character on the first page.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use super::common::{SearchParams, parse_params, run_search};
use crate::domains::swapi::{Character, Collection, SwapiClient};

/// Search characters tool.
#[derive(Debug, Clone)]
pub struct SearchCharactersTool;

impl SearchCharactersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_characters";

    /// Human-readable title.
    pub const TITLE: &'static str = "Search characters Star Wars";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search characters Star Wars, in API by name";

    /// Label used in diagnostics.
    pub const OPERATION: &'static str = "Characters search";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(search = %params.search))]
    pub async fn execute(params: &SearchParams, client: &SwapiClient) -> CallToolResult {
        info!("Character search tool called for: {}", params.search);
        run_search::<Character>(client, Collection::People, &params.search, Self::OPERATION).await
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
