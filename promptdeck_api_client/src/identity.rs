//! Client identity sent during the authentication handshake.
//!
//! The identity is immutable for the lifetime of the process. The machine
//! fingerprint is a truncated SHA-256 over host-identifying attributes; it is
//! stable across calls within a process but makes no global-uniqueness claim.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Fixed client identifier registered with the remote API.
pub const CLIENT_ID: &str = "mcp_prompt_engineer_official";
/// Protocol version reported during the handshake.
pub const MCP_VERSION: &str = "1.0.0";

/// The identity payload for `POST /auth/mcp`.
#[derive(Debug, Clone, Serialize)]
pub struct ClientIdentity {
    pub client_id: String,
    pub version: String,
    pub user_agent: String,
    pub machine_id: String,
}

impl ClientIdentity {
    pub fn new() -> Self {
        Self {
            client_id: CLIENT_ID.to_string(),
            version: MCP_VERSION.to_string(),
            user_agent: format!("mcp-prompt-engineer/{MCP_VERSION}"),
            machine_id: machine_id(),
        }
    }
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self::new()
    }
}

/// First 8 bytes of SHA-256 over `{hostname}-{os}-{arch}`, as 16 hex chars.
pub fn machine_id() -> String {
    let hostname = std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());
    let machine_info = format!(
        "{hostname}-{}-{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    let digest = Sha256::digest(machine_info.as_bytes());
    let mut id = String::with_capacity(16);
    for byte in &digest[..8] {
        let _ = write!(id, "{byte:02x}");
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_id_is_16_hex_chars() {
        let id = machine_id();
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn machine_id_is_stable_within_process() {
        assert_eq!(machine_id(), machine_id());
    }

    #[test]
    fn identity_serializes_expected_fields() {
        let identity = ClientIdentity::new();
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["client_id"], CLIENT_ID);
        assert_eq!(value["version"], MCP_VERSION);
        assert_eq!(
            value["user_agent"],
            format!("mcp-prompt-engineer/{MCP_VERSION}")
        );
        assert_eq!(value["machine_id"].as_str().unwrap().len(), 16);
    }
}
