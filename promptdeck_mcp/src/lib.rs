//! # Promptdeck MCP Server
//!
//! A thin protocol adapter that exposes the Prompt Engineer Helper API as
//! callable tools under the Model Context Protocol. Every tool is a direct
//! proxy from an inbound tool call to an outbound HTTP request; the
//! authenticated channel itself lives in the `promptdeck_api_client` crate.
//!
//! ## Modules
//!
//! - **`mcp_service`**: The `rmcp::ServerHandler` implementation with the
//!   fixed tool catalog and the call dispatch.
//! - **`shell`**: CLI entry point: stdio MCP server by default, plus a
//!   `health` diagnostic subcommand.
//! - **`utils`**: Logging initialization.

pub mod mcp_service;
pub mod shell;
pub mod utils;

pub use mcp_service::PromptdeckService;
