//! Resources domain module.
//!
//! Resources are read-only, URI-addressed data sources that MCP clients fetch
//! without arguments. Here they are live views over the SWAPI collections.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/`
//! 2. Implement the `ResourceDefinition` trait and add a `ResourceSource` variant
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{ResourceDefinition, ResourceSource};
pub use error::ResourceError;
pub use registry::get_all_resources;
pub use service::{ResourceEntry, ResourceService};
