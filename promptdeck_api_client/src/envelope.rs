//! Normalized result envelopes.
//!
//! Every gateway call resolves to a `serde_json::Value` mapping. Callers
//! distinguish success from failure solely by the presence of an `"error"`
//! key: a parsed JSON body is returned as-is, a non-JSON body becomes
//! `{"raw_content", "status_code"}`, and any failure becomes `{"error"}`.

use serde_json::{Value, json};

/// Failure envelope.
pub fn error(message: impl Into<String>) -> Value {
    json!({ "error": message.into() })
}

/// Degraded-but-successful envelope for non-JSON upstream responses.
/// The body is preserved byte-for-byte as text.
pub fn raw(text: String, status_code: u16) -> Value {
    json!({ "raw_content": text, "status_code": status_code })
}

/// True when the envelope carries an `"error"` key.
pub fn is_error(envelope: &Value) -> bool {
    envelope.get("error").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_has_error_key_only() {
        let env = error("boom");
        assert!(is_error(&env));
        assert_eq!(env["error"], "boom");
        assert_eq!(env.as_object().unwrap().len(), 1);
    }

    #[test]
    fn raw_envelope_preserves_body_and_status() {
        let env = raw("plain text\nwith newline".to_string(), 200);
        assert!(!is_error(&env));
        assert_eq!(env["raw_content"], "plain text\nwith newline");
        assert_eq!(env["status_code"], 200);
    }
}
