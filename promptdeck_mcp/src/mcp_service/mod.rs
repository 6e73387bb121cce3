//! # Promptdeck MCP Service Implementation
//!
//! `PromptdeckService` implements the `rmcp::ServerHandler` trait, making it
//! the central point for handling all incoming MCP requests from a client.
//!
//! - **`get_info()`**: Provides the client with initial server information.
//! - **`list_tools()`**: Returns the fixed tool catalog; the tool set mirrors
//!   the remote API's resource paths one-to-one.
//! - **`call_tool()`**: Dispatches by tool name to the request gateway.

pub mod catalog;
mod handlers;

use promptdeck_api_client::ApiClient;
use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
        ToolsCapability,
    },
    service::{RequestContext, RoleServer},
};
use std::sync::Arc;

/// `PromptdeckService` is the server handler for the MCP service.
#[derive(Clone)]
pub struct PromptdeckService {
    pub client: Arc<ApiClient>,
}

impl PromptdeckService {
    /// Creates a new service backed by the given request gateway.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[allow(clippy::manual_async_fn)] // Required by rmcp ServerHandler trait
impl ServerHandler for PromptdeckService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                title: Some(env!("CARGO_PKG_NAME").to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Browse, search, and compare AI service prompt and tool files from the \
                 Prompt Engineer Helper API."
                    .to_string(),
            ),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                meta: None,
                tools: catalog::tools(),
                next_cursor: None,
            })
        }
    }

    fn call_tool(
        &self,
        params: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            let name = params.name.to_string();
            let args = params.arguments.unwrap_or_default();
            self.dispatch(&name, args).await
        }
    }
}
