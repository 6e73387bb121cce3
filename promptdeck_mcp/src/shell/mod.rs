//! # Shell Module
//!
//! Main entry point and CLI logic for the `promptdeck_mcp` binary: argument
//! parsing, the stdio server mode, and the health diagnostic mode.

pub mod cli;

pub use cli::{Cli, Command, run};
