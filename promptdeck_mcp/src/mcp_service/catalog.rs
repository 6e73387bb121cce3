//! The fixed tool catalog.
//!
//! One tool per remote resource path, plus convenience wrappers that are pure
//! compositions of the base tools with fixed parameters. Input schemas are
//! built by hand as plain JSON schema objects.

use rmcp::model::Tool;
use serde_json::{Map, Value, json};
use std::sync::Arc;

pub fn tools() -> Vec<Tool> {
    vec![
        tool(
            "get_all_services",
            "Get all available AI services and their file statistics.",
            empty_schema(),
        ),
        tool(
            "get_service_details",
            "Get detailed information about a specific service, optionally filtered by file type.",
            object_schema(
                &[
                    (
                        "service",
                        string_prop("Service name (e.g., 'cursor-prompts', 'windsurf', 'replit')"),
                    ),
                    (
                        "file_type",
                        string_prop("Filter by file type (e.g., '.txt', '.json', '.md')"),
                    ),
                ],
                &["service"],
            ),
        ),
        tool(
            "get_file_content",
            "Get the content of a specific file from a service.",
            object_schema(
                &[
                    (
                        "service",
                        string_prop("Service name (e.g., 'cursor-prompts', 'windsurf')"),
                    ),
                    (
                        "file_path",
                        string_prop(
                            "File path within the service (e.g., 'prompt.txt', 'tools.json')",
                        ),
                    ),
                ],
                &["service", "file_path"],
            ),
        ),
        tool(
            "search_content",
            "Search for content across all files or specific services.",
            object_schema(
                &[
                    (
                        "query",
                        string_prop("Search term to look for in file contents"),
                    ),
                    (
                        "file_type",
                        string_prop("Filter by file type (e.g., '.txt', '.json')"),
                    ),
                    (
                        "services",
                        string_list_prop("Limit search to specific services"),
                    ),
                ],
                &["query"],
            ),
        ),
        tool(
            "get_multiple_services",
            "Get information about multiple services in a single request.",
            object_schema(
                &[
                    (
                        "services",
                        string_list_prop("List of service names to retrieve"),
                    ),
                    ("file_type", string_prop("Filter by file type")),
                ],
                &["services"],
            ),
        ),
        tool(
            "get_all_prompts",
            "Get all prompt files (.txt files with 'prompt' in the name) from all services.",
            empty_schema(),
        ),
        tool(
            "get_all_tools",
            "Get all tool configuration files (.json files with 'tool' in the name) from all services.",
            empty_schema(),
        ),
        tool(
            "get_file_types",
            "Get all available file types and their distribution across services.",
            empty_schema(),
        ),
        tool(
            "compare_services",
            "Compare two services to see their differences and similarities.",
            object_schema(
                &[
                    ("service1", string_prop("First service to compare")),
                    ("service2", string_prop("Second service to compare")),
                ],
                &["service1", "service2"],
            ),
        ),
        tool(
            "get_api_statistics",
            "Get comprehensive statistics about the API data.",
            empty_schema(),
        ),
        tool(
            "verify_authentication",
            "Verify that the MCP can communicate with the API and show session status.",
            empty_schema(),
        ),
        tool(
            "refresh_session",
            "Manually refresh the API session token.",
            empty_schema(),
        ),
        tool(
            "health_check",
            "Check if the API is healthy and operational. Requires no authentication.",
            empty_schema(),
        ),
        tool(
            "get_cursor_prompts",
            "Quick access to all Cursor prompts and tools.",
            empty_schema(),
        ),
        tool(
            "get_windsurf_config",
            "Quick access to Windsurf prompts and tools configuration.",
            empty_schema(),
        ),
        tool(
            "get_replit_config",
            "Quick access to Replit prompts and tools configuration.",
            empty_schema(),
        ),
        tool(
            "get_open_source_prompts",
            "Quick access to all open source prompts (bolt, cline, codex-cli, roo-code).",
            empty_schema(),
        ),
        tool(
            "search_prompts_only",
            "Search specifically in prompt files (.txt files) across all services.",
            object_schema(
                &[(
                    "query",
                    string_prop("Search term to look for in prompt files"),
                )],
                &["query"],
            ),
        ),
        tool(
            "search_tools_only",
            "Search specifically in tool configuration files (.json files) across all services.",
            object_schema(
                &[("query", string_prop("Search term to look for in tool files"))],
                &["query"],
            ),
        ),
        tool(
            "find_agent_prompts",
            "Find all prompts related to 'agent' functionality across all services.",
            empty_schema(),
        ),
        tool(
            "find_chat_prompts",
            "Find all prompts related to 'chat' functionality across all services.",
            empty_schema(),
        ),
        tool(
            "get_specific_prompt",
            "Get a specific prompt file from a service.",
            object_schema(
                &[
                    (
                        "service",
                        string_prop("Service name (e.g., 'cursor-prompts', 'windsurf')"),
                    ),
                    (
                        "prompt_name",
                        string_prop("Prompt file name (e.g., 'prompt.txt', 'agent-prompt.txt')"),
                    ),
                ],
                &["service", "prompt_name"],
            ),
        ),
        tool(
            "get_specific_tool_config",
            "Get a specific tool configuration file from a service.",
            object_schema(
                &[
                    (
                        "service",
                        string_prop("Service name (e.g., 'cursor-prompts', 'windsurf', 'replit')"),
                    ),
                    (
                        "tool_name",
                        string_prop("Tool file name (e.g., 'tools.json', 'agent-tools-v1-0.json')"),
                    ),
                ],
                &["service", "tool_name"],
            ),
        ),
        tool(
            "get_ai_services_overview",
            "Get a comprehensive overview of all AI services, their capabilities, and available resources.",
            empty_schema(),
        ),
    ]
}

fn tool(name: &str, description: &str, input_schema: Arc<Map<String, Value>>) -> Tool {
    Tool {
        name: name.to_string().into(),
        title: Some(name.to_string()),
        icons: None,
        description: Some(description.to_string().into()),
        input_schema,
        output_schema: None,
        annotations: None,
        execution: None,
        meta: None,
    }
}

fn object_schema(properties: &[(&str, Value)], required: &[&str]) -> Arc<Map<String, Value>> {
    let mut props = Map::new();
    for (name, prop) in properties {
        props.insert((*name).to_string(), prop.clone());
    }
    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(props));
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }
    Arc::new(schema)
}

fn empty_schema() -> Arc<Map<String, Value>> {
    object_schema(&[], &[])
}

fn string_prop(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn string_list_prop(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description,
    })
}
