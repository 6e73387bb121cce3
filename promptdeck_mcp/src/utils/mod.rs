//! Shared utilities for the Promptdeck MCP server.

pub mod logging;
