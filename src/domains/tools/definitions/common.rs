//! Common utilities shared across the SWAPI tools.
//!
//! Parameter types, response helpers, and the search pipeline used by the
//! three search-by-name tools.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::domains::swapi::format::{Listing, describe_failure, format_search_results, no_match_message};
use crate::domains::swapi::{Collection, SwapiClient, SwapiError};

/// Parameters shared by the search-by-name tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Free-text search term matched by the remote against names or titles.
    #[schemars(length(min = 1))]
    pub search: String,
}

/// Decode call arguments into the tool's parameter type.
///
/// A shape mismatch is an `invalid_params` protocol error, not a diagnostic.
pub fn parse_params<P: DeserializeOwned>(args: JsonObject) -> Result<P, McpError> {
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Render a remote failure as a diagnostic.
///
/// Failures are reported inside a successful envelope so a single bad call
/// never surfaces as a protocol error.
pub fn failure_result(operation: &str, err: &SwapiError) -> CallToolResult {
    success_result(describe_failure(operation, err))
}

/// Run one search: GET the collection, short-circuit on no results, render.
pub async fn run_search<T>(
    client: &SwapiClient,
    collection: Collection,
    term: &str,
    operation: &str,
) -> CallToolResult
where
    T: Listing + DeserializeOwned,
{
    match client.search::<T>(collection, term).await {
        Ok(page) if page.is_empty() => {
            info!("{}: no match for '{}'", operation, term);
            success_result(no_match_message(term))
        }
        Ok(page) => {
            info!("{}: {} result(s) for '{}'", operation, page.results.len(), term);
            success_result(format_search_results(&page.results))
        }
        Err(e) => failure_result(operation, &e),
    }
}
