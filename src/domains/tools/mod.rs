//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call by name. Each tool
//! here maps one call onto one SWAPI request and renders the answer as text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder used by the server handler
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `species.rs`)
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`

pub mod definitions;
pub mod router;

pub use router::build_tool_router;
