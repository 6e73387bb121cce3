//! Integration tests wiring tool dispatch to a mock remote API: proxy tools,
//! the unauthenticated health tool, and the convenience wrappers.

use promptdeck_mcp::PromptdeckService;
use promptdeck_api_client::ApiClient;
use rmcp::model::CallToolResult;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/mcp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "session_token": "tok", "expires_at": "2026-09-01T00:00:00Z" },
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(server)
        .await;
}

fn service_for(server: &MockServer) -> PromptdeckService {
    PromptdeckService::new(Arc::new(
        ApiClient::new(&server.uri()).expect("valid mock server URL"),
    ))
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn payload(result: &CallToolResult) -> Value {
    let text = result
        .content
        .iter()
        .find_map(|c| c.as_text().map(|t| t.text.clone()))
        .expect("text content");
    serde_json::from_str(&text).expect("JSON payload")
}

#[tokio::test]
async fn get_all_services_proxies_the_services_endpoint() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    let body = json!({"services": {"cursor-prompts": {"files": 12}}});
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .dispatch("get_all_services", Map::new())
        .await
        .expect("tool result");
    assert_eq!(payload(&result), body);
}

#[tokio::test]
async fn get_service_details_forwards_the_file_type_filter() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    Mock::given(method("GET"))
        .and(path("/services/windsurf"))
        .and(query_param("file_type", ".json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"service": "windsurf"})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .dispatch(
            "get_service_details",
            args(json!({"service": "windsurf", "file_type": ".json"})),
        )
        .await
        .expect("tool result");
    assert_eq!(payload(&result), json!({"service": "windsurf"}));
}

#[tokio::test]
async fn search_prompts_only_pins_the_txt_file_type() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"query": "agent", "file_type": ".txt"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"matches": []})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .dispatch("search_prompts_only", args(json!({"query": "agent"})))
        .await
        .expect("tool result");
    assert_eq!(payload(&result), json!({"matches": []}));
}

#[tokio::test]
async fn find_chat_prompts_searches_with_fixed_query() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"query": "chat"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"matches": ["x"]})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .dispatch("find_chat_prompts", Map::new())
        .await
        .expect("tool result");
    assert_eq!(payload(&result), json!({"matches": ["x"]}));
}

#[tokio::test]
async fn get_specific_prompt_maps_to_the_file_endpoint() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    Mock::given(method("GET"))
        .and(path("/services/cursor-prompts/files/agent-prompt.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "You are..."})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .dispatch(
            "get_specific_prompt",
            args(json!({"service": "cursor-prompts", "prompt_name": "agent-prompt.txt"})),
        )
        .await
        .expect("tool result");
    assert_eq!(payload(&result), json!({"content": "You are..."}));
}

#[tokio::test]
async fn health_check_tool_never_authenticates() {
    let server = MockServer::start().await;
    // No auth endpoints mounted: any handshake or probe would 404 the test.
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .dispatch("health_check", Map::new())
        .await
        .expect("tool result");
    assert_eq!(payload(&result), json!({"status": "healthy"}));

    let requests = server.received_requests().await.expect("request recording");
    assert!(requests.iter().all(|r| r.url.path() == "/health"));
    assert!(
        requests
            .iter()
            .all(|r| !r.headers.contains_key("authorization"))
    );
}

#[tokio::test]
async fn get_ai_services_overview_composes_services_and_stats() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"services": {}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_files": 7})))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .dispatch("get_ai_services_overview", Map::new())
        .await
        .expect("tool result");
    let value = payload(&result);
    assert_eq!(value["services"], json!({"services": {}}));
    assert_eq!(value["statistics"], json!({"total_files": 7}));
    assert!(value["overview"].as_str().unwrap().contains("overview"));
}

#[tokio::test]
async fn upstream_failure_surfaces_as_error_payload_not_protocol_error() {
    let server = MockServer::start().await;
    // Authentication is impossible; the tool must still resolve successfully
    // with an error payload rather than an MCP protocol error.
    Mock::given(method("POST"))
        .and(path("/auth/mcp"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .dispatch("get_all_prompts", Map::new())
        .await
        .expect("tool result");
    let value = payload(&result);
    assert_eq!(value["error"], "Failed to authenticate with API");
}
