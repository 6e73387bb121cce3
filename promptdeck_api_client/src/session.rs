//! Session state and the authentication handshake.
//!
//! Exactly one session is maintained per process lifetime. All mutation goes
//! through the handshake; the session mutex is held across it, so concurrent
//! callers that race on an expired token perform one handshake and the rest
//! observe the fresh token.

use crate::error::Result;
use crate::identity::ClientIdentity;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use url::Url;

/// The process's current authentication state.
///
/// A present token was issued by the most recent successful handshake; an
/// absent token means no successful authentication has occurred yet. The
/// expiry is relayed verbatim from the remote and never compared locally
/// against the wall clock; validity is inferred from a live probe or a 401
/// on the real call.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
    pub expires_at: Option<Value>,
}

/// Owns the session and hides re-authentication behind [`ensure_valid`].
///
/// [`ensure_valid`]: SessionManager::ensure_valid
pub struct SessionManager {
    base_url: Url,
    identity: ClientIdentity,
    session: Mutex<Session>,
}

impl SessionManager {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            identity: ClientIdentity::new(),
            session: Mutex::new(Session::default()),
        }
    }

    /// Performs the authentication handshake and stores the issued token.
    ///
    /// Returns false on any non-success response, network failure, or
    /// malformed body, leaving prior state untouched: a stale-but-previously-
    /// valid token is deliberately not cleared by a failed re-authentication.
    pub async fn authenticate(&self, http: &reqwest::Client) -> bool {
        let mut session = self.session.lock().await;
        self.handshake(http, &mut session).await
    }

    /// Ensures a usable token is held, authenticating if absent or rejected.
    ///
    /// With a token in hand this probes `/auth/status`. Only a 401 forces
    /// re-authentication; the probe is optimistic, so any other status and
    /// any transport error leave the current token in force.
    pub async fn ensure_valid(&self, http: &reqwest::Client) -> bool {
        let mut session = self.session.lock().await;
        let Some(token) = session.token.clone() else {
            return self.handshake(http, &mut session).await;
        };

        let status_url = match self.base_url.join("/auth/status") {
            Ok(url) => url,
            Err(error) => {
                warn!("invalid status probe URL: {error}");
                return false;
            }
        };
        match http.get(status_url).bearer_auth(&token).send().await {
            Ok(response) if response.status() == StatusCode::UNAUTHORIZED => {
                info!("session token rejected by status probe, re-authenticating");
                self.handshake(http, &mut session).await
            }
            Ok(_) => true,
            Err(error) => {
                debug!("status probe failed, keeping current token: {error}");
                true
            }
        }
    }

    /// Replaces the stored token and expiry, e.g. after a manual refresh.
    pub async fn install(&self, token: Option<String>, expires_at: Option<Value>) {
        let mut session = self.session.lock().await;
        session.token = token;
        session.expires_at = expires_at;
    }

    pub async fn token(&self) -> Option<String> {
        self.session.lock().await.token.clone()
    }

    pub async fn has_token(&self) -> bool {
        self.session.lock().await.token.is_some()
    }

    pub async fn expires_at(&self) -> Option<Value> {
        self.session.lock().await.expires_at.clone()
    }

    async fn handshake(&self, http: &reqwest::Client, session: &mut Session) -> bool {
        match self.request_session(http).await {
            Ok(Some(fresh)) => {
                debug!("authentication handshake succeeded");
                *session = fresh;
                true
            }
            Ok(None) => {
                warn!("authentication rejected by remote API");
                false
            }
            Err(error) => {
                warn!("authentication failed: {error}");
                false
            }
        }
    }

    async fn request_session(&self, http: &reqwest::Client) -> Result<Option<Session>> {
        let auth_url = self.base_url.join("/auth/mcp")?;
        let response = http.post(auth_url).json(&self.identity).send().await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        let body: Value = serde_json::from_str(&response.text().await?)?;
        if body.get("success").and_then(Value::as_bool) != Some(true) {
            return Ok(None);
        }
        let data = body.get("data").cloned().unwrap_or(Value::Null);
        let Some(token) = data.get("session_token").and_then(Value::as_str) else {
            // A success flag without a token is a malformed body.
            return Ok(None);
        };
        Ok(Some(Session {
            token: Some(token.to_string()),
            expires_at: data.get("expires_at").cloned(),
        }))
    }
}
