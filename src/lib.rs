//! SWAPI MCP Server Library
//!
//! Exposes the public Star Wars API (<https://swapi.dev>) to MCP clients as
//! four tools and one resource. Every call is one GET against the remote
//! rendered into plain text.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler, and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **swapi**: remote client, typed models, and text formatting
//!   - **tools**: `search_characters`, `search_planets`, `search_films`, `search_characters_byId`
//!   - **resources**: `swapi://films`, every film ordered by episode
//!
//! # Example
//!
//! ```rust,no_run
//! use swapi_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
