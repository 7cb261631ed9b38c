//! MCP (Model Context Protocol) server and tool types.
//!
//! This module provides an MCP server implementation for the Backlog API,
//! allowing AI assistants to fetch projects, issues, and wikis, and to
//! rewrite issue descriptions and wiki content.
//!
//! # Example
//!
//! ```no_run
//! use backlogapi::mcp::BacklogServer;
//!
//! # fn main() -> backlogapi::Result<()> {
//! let server = BacklogServer::from_env()?;
//! // Server can now be used with rmcp transport
//! # Ok(())
//! # }
//! ```

mod params;
mod server;

pub use params::*;
pub use server::BacklogServer;
