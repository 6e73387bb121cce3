//! Tool call dispatch.
//!
//! Each arm is a direct proxy to one remote endpoint; convenience wrappers
//! reuse the base operations with fixed parameters. Gateway results are
//! already normalized envelopes, so every arm resolves to a successful tool
//! result whose payload may carry an `"error"` key.

use crate::mcp_service::PromptdeckService;
use rmcp::model::{CallToolResult, Content, ErrorData as McpError};
use serde_json::{Map, Value, json};
use tracing::debug;

impl PromptdeckService {
    /// Executes one named tool with the given arguments.
    pub async fn dispatch(
        &self,
        name: &str,
        args: Map<String, Value>,
    ) -> Result<CallToolResult, McpError> {
        debug!("dispatching tool '{name}'");
        let result = match name {
            "get_all_services" => self.client.get("/services").await,
            "get_service_details" => {
                let service = require_str(&args, "service")?;
                let mut query = Vec::new();
                if let Some(file_type) = optional_str(&args, "file_type") {
                    query.push(("file_type".to_string(), file_type));
                }
                self.client
                    .get_with_query(&format!("/services/{service}"), &query)
                    .await
            }
            "get_file_content" => {
                let service = require_str(&args, "service")?;
                let file_path = require_str(&args, "file_path")?;
                self.file_content(&service, &file_path).await
            }
            "search_content" => {
                let query = require_str(&args, "query")?;
                self.search(
                    &query,
                    optional_str(&args, "file_type"),
                    optional_str_list(&args, "services"),
                )
                .await
            }
            "get_multiple_services" => {
                let services = require_str_list(&args, "services")?;
                let mut body = json!({ "services": services });
                if let Some(file_type) = optional_str(&args, "file_type") {
                    body["file_type"] = json!(file_type);
                }
                self.client.post("/services/multiple", body).await
            }
            "get_all_prompts" => self.client.get("/prompts").await,
            "get_all_tools" => self.client.get("/tools").await,
            "get_file_types" => self.client.get("/files/types").await,
            "compare_services" => {
                let service1 = require_str(&args, "service1")?;
                let service2 = require_str(&args, "service2")?;
                self.client
                    .get(&format!("/compare/{service1}/{service2}"))
                    .await
            }
            "get_api_statistics" => self.client.get("/stats").await,
            "verify_authentication" => self.client.verify_authentication().await,
            "refresh_session" => self.client.refresh_session().await,
            "health_check" => self.client.health_check().await,
            "get_cursor_prompts" => self.client.get("/services/cursor-prompts").await,
            "get_windsurf_config" => self.client.get("/services/windsurf").await,
            "get_replit_config" => self.client.get("/services/replit").await,
            "get_open_source_prompts" => self.client.get("/services/open-source-prompts").await,
            "search_prompts_only" => {
                let query = require_str(&args, "query")?;
                self.search(&query, Some(".txt".to_string()), None).await
            }
            "search_tools_only" => {
                let query = require_str(&args, "query")?;
                self.search(&query, Some(".json".to_string()), None).await
            }
            "find_agent_prompts" => self.search("agent", None, None).await,
            "find_chat_prompts" => self.search("chat", None, None).await,
            "get_specific_prompt" => {
                let service = require_str(&args, "service")?;
                let prompt_name = require_str(&args, "prompt_name")?;
                self.file_content(&service, &prompt_name).await
            }
            "get_specific_tool_config" => {
                let service = require_str(&args, "service")?;
                let tool_name = require_str(&args, "tool_name")?;
                self.file_content(&service, &tool_name).await
            }
            "get_ai_services_overview" => {
                let services = self.client.get("/services").await;
                let statistics = self.client.get("/stats").await;
                json!({
                    "services": services,
                    "statistics": statistics,
                    "overview": "Complete overview of all available AI services and their resources",
                })
            }
            _ => {
                return Err(McpError::invalid_params(
                    format!("Tool '{name}' not found."),
                    Some(json!({ "tool_name": name })),
                ));
            }
        };
        Ok(to_tool_result(&result))
    }

    async fn file_content(&self, service: &str, file_path: &str) -> Value {
        self.client
            .get(&format!("/services/{service}/files/{file_path}"))
            .await
    }

    async fn search(
        &self,
        query: &str,
        file_type: Option<String>,
        services: Option<Vec<String>>,
    ) -> Value {
        let mut body = json!({ "query": query });
        if let Some(file_type) = file_type {
            body["file_type"] = json!(file_type);
        }
        if let Some(services) = services {
            body["services"] = json!(services);
        }
        self.client.post("/search", body).await
    }
}

fn to_tool_result(value: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

fn require_str(args: &Map<String, Value>, key: &str) -> Result<String, McpError> {
    args.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            McpError::invalid_params(
                format!("'{key}' parameter is required and must be a string"),
                None,
            )
        })
}

fn require_str_list(args: &Map<String, Value>, key: &str) -> Result<Vec<String>, McpError> {
    optional_str_list(args, key).ok_or_else(|| {
        McpError::invalid_params(
            format!("'{key}' parameter is required and must be a list of strings"),
            None,
        )
    })
}

fn optional_str(args: &Map<String, Value>, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_string)
}

fn optional_str_list(args: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = args.get(key)?.as_array()?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}
