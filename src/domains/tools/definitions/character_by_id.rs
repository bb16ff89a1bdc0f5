//! Character lookup by numeric identifier.
//!
//! There is no empty-result branch: an unknown id comes back from the remote
//! as a 404 and is reported through the diagnostic path.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{failure_result, parse_params, success_result};
use crate::domains::swapi::SwapiClient;
use crate::domains::swapi::format::format_character;

/// Parameters for the character lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CharacterByIdParams {
    /// Numeric SWAPI identifier of the character.
    pub id: u32,
}

/// Fetch-character-by-id tool.
#[derive(Debug, Clone)]
pub struct CharacterByIdTool;

impl CharacterByIdTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_characters_byId";

    pub const TITLE: &'static str = "Search character Star Wars by id";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search character Star Wars, in API by id";

    pub const OPERATION: &'static str = "Character lookup";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(id = params.id))]
    pub async fn execute(params: &CharacterByIdParams, client: &SwapiClient) -> CallToolResult {
        info!("Character lookup tool called for id: {}", params.id);

        match client.character(params.id).await {
            Ok(character) => success_result(format_character(&character)),
            Err(e) => failure_result(Self::OPERATION, &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CharacterByIdParams>(),
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
                let params: CharacterByIdParams = parse_params(args)?;
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
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_params_reject_non_numeric_id() {
        assert!(serde_json::from_str::<CharacterByIdParams>(r#"{"id": "one"}"#).is_err());
        assert!(serde_json::from_str::<CharacterByIdParams>(r#"{"id": -1}"#).is_err());
        let params: CharacterByIdParams = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(params.id, 1);
    }

    #[test]
    fn test_tool_metadata() {
        let tool = CharacterByIdTool::to_tool();
        assert_eq!(tool.name, "search_characters_byId");
        assert_eq!(
            tool.description.as_deref(),
            Some("Search character Star Wars, in API by id")
        );
    }

    #[tokio::test]
    async fn test_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "Luke Skywalker", "height": "172", "mass": "77",
                "hair_color": "blond", "skin_color": "fair", "eye_color": "blue",
                "birth_year": "19BBY", "gender": "male",
                "url": "https://swapi.dev/api/people/1/"
            })))
            .mount(&server)
            .await;

        let result = CharacterByIdTool::execute(&CharacterByIdParams { id: 1 }, &client_for(&server)).await;
        assert_eq!(
            text_of(&result),
            "Character found:\n\n Name: Luke Skywalker, Height: 172, Mass: 77, Birth Year: 19BBY, \
             Gender: male, Eye Color: blue, Hair Color: blond, Skin Color: fair"
        );
    }

    #[tokio::test]
    async fn test_unknown_id_takes_diagnostic_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/9999/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({ "detail": "Not found" })),
            )
            .mount(&server)
            .await;

        let result =
            CharacterByIdTool::execute(&CharacterByIdParams { id: 9999 }, &client_for(&server)).await;
        assert_eq!(
            text_of(&result),
            "Error occurred during Character lookup: Request failed with status code 404: Not found"
        );
    }
}
