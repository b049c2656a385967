//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool reads a fresh device listing and returns a derived view of it.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `request.rs` - Typed, validated tool requests
//! - `registry.rs` - Tool catalog and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with `NAME`, `execute()` and `to_tool()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a `ToolRequest` variant and parse arm in `request.rs`
//! 4. Register it in `registry.rs` (catalog and `run`)

pub mod definitions;
mod error;
mod registry;
mod request;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use request::ToolRequest;
