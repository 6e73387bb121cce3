//! The request gateway.
//!
//! [`ApiClient`] executes one logical HTTP call against the remote API with
//! authentication guaranteed: ensure a valid session, attach the bearer
//! header, send, and on a mid-flight 401 re-authenticate once and retry
//! exactly once. Every outcome, including transport failures, is folded into
//! a JSON envelope; no error escapes to the tool boundary.

use crate::envelope;
use crate::error::Result;
use crate::session::SessionManager;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, StatusCode};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tracing::{debug, info};
use url::Url;

/// Fixed origin of the Prompt Engineer Helper API.
pub const DEFAULT_BASE_URL: &str = "https://prompt-engineer-helper.vercel.app";

/// One authenticated channel per process, reused across calls.
///
/// The underlying `reqwest::Client` is created lazily on first use, shared by
/// all subsequent calls, dropped by [`close`](ApiClient::close), and lazily
/// recreated if a call arrives after closure.
pub struct ApiClient {
    base_url: Url,
    http: Mutex<Option<reqwest::Client>>,
    session: SessionManager,
}

impl ApiClient {
    /// Creates a gateway for the given origin, e.g. [`DEFAULT_BASE_URL`].
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            session: SessionManager::new(base_url.clone()),
            base_url,
            http: Mutex::new(None),
        })
    }

    /// The session manager backing this gateway.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Executes one authenticated call and normalizes the response.
    ///
    /// Short-circuits with an error envelope when authentication cannot be
    /// established. A 401 on the real call triggers one re-authentication
    /// and at most one retry; whatever that retry yields is returned.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&Value>,
    ) -> Value {
        let http = self.http_client().await;
        if !self.session.ensure_valid(&http).await {
            return envelope::error("Failed to authenticate with API");
        }

        let url = match self.base_url.join(path) {
            Ok(url) => url,
            Err(error) => return envelope::error(format!("Request failed: {error}")),
        };

        let response = match self
            .send(&http, method.clone(), url.clone(), query, body)
            .await
        {
            Ok(response) => response,
            Err(error) => return envelope::error(format!("Request failed: {error}")),
        };

        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::normalize(response).await;
        }

        // Token expired mid-request: re-authenticate once and retry once,
        // returning whatever the retry yields.
        info!("received 401 mid-request, re-authenticating");
        if !self.session.authenticate(&http).await {
            return envelope::error("Authentication failed");
        }
        match self.send(&http, method, url, query, body).await {
            Ok(retry) => Self::normalize(retry).await,
            Err(error) => envelope::error(format!("Request failed: {error}")),
        }
    }

    pub async fn get(&self, path: &str) -> Value {
        self.execute(Method::GET, path, None, None).await
    }

    pub async fn get_with_query(&self, path: &str, query: &[(String, String)]) -> Value {
        self.execute(Method::GET, path, Some(query), None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Value {
        self.execute(Method::POST, path, None, Some(&body)).await
    }

    /// Probes `/health` without authenticating; no bearer header is attached
    /// and no session handshake is triggered.
    pub async fn health_check(&self) -> Value {
        let http = self.http_client().await;
        let url = match self.base_url.join("/health") {
            Ok(url) => url,
            Err(error) => return envelope::error(format!("Health check failed: {error}")),
        };
        match http.get(url).send().await {
            Ok(response) => Self::normalize(response).await,
            Err(error) => envelope::error(format!("Health check failed: {error}")),
        }
    }

    /// Forces an authentication check and reports the session status.
    pub async fn verify_authentication(&self) -> Value {
        let http = self.http_client().await;
        if !self.session.ensure_valid(&http).await {
            return json!({
                "connected": false,
                "error": "Failed to authenticate with the API",
                "session_token": self.session.has_token().await,
            });
        }

        let result = self.get("/auth/status").await;
        if result.get("success").is_some() {
            json!({
                "connected": true,
                "message": "MCP is successfully connected to the Prompt Engineer Helper API",
                "session_info": result.get("data").cloned().unwrap_or_else(|| json!({})),
                "token_expires_at": self.session.expires_at().await,
            })
        } else {
            json!({
                "connected": false,
                "error": result
                    .get("error")
                    .cloned()
                    .unwrap_or_else(|| json!("Unknown authentication error")),
                "session_token": self.session.has_token().await,
            })
        }
    }

    /// Manually refreshes the session token via `/auth/refresh`.
    pub async fn refresh_session(&self) -> Value {
        let result = self.post("/auth/refresh", json!({})).await;
        if result.get("success").is_some() {
            let data = result.get("data").cloned().unwrap_or_else(|| json!({}));
            let token = data
                .get("session_token")
                .and_then(Value::as_str)
                .map(str::to_string);
            let expires_at = data.get("expires_at").cloned();
            self.session.install(token, expires_at.clone()).await;
            json!({
                "refreshed": true,
                "message": "Session token refreshed successfully",
                "expires_at": expires_at,
                "expires_in_hours": data.get("expires_in_hours").cloned(),
            })
        } else {
            json!({
                "refreshed": false,
                "error": result
                    .get("error")
                    .cloned()
                    .unwrap_or_else(|| json!("Failed to refresh session")),
            })
        }
    }

    /// Drops the pooled HTTP connections. A later call recreates them lazily.
    pub async fn close(&self) {
        if self.http.lock().await.take().is_some() {
            debug!("HTTP client closed");
        }
    }

    async fn http_client(&self) -> reqwest::Client {
        let mut guard = self.http.lock().await;
        guard.get_or_insert_with(reqwest::Client::new).clone()
    }

    async fn send(
        &self,
        http: &reqwest::Client,
        method: Method,
        url: Url,
        query: Option<&[(String, String)]>,
        body: Option<&Value>,
    ) -> reqwest::Result<Response> {
        let mut request = http.request(method, url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = self.session.token().await {
            request = request.bearer_auth(token);
        }
        request.send().await
    }

    async fn normalize(response: Response) -> Value {
        let status_code = response.status().as_u16();
        if has_json_content_type(&response) {
            match response.json::<Value>().await {
                Ok(body) => body,
                Err(error) => envelope::error(format!("Request failed: {error}")),
            }
        } else {
            match response.text().await {
                Ok(text) => envelope::raw(text, status_code),
                Err(error) => envelope::error(format!("Request failed: {error}")),
            }
        }
    }
}

fn has_json_content_type(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}
