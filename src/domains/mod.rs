//! Domains module containing business logic organized by bounded contexts.
//!
//! - **devices**: read access to the Tailscale device inventory
//! - **tools**: the MCP tools built on top of it

pub mod devices;
pub mod tools;
