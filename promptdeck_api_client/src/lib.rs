//! # Promptdeck API Client
//!
//! This crate provides the authenticated HTTP channel to the Prompt Engineer
//! Helper API. It owns the process-wide session state (bearer token and its
//! declared expiry) and wraps every outbound call with the
//! "ensure authenticated, attach bearer header, send, recover once from a
//! mid-flight 401" sequence.
//!
//! ## Key Components
//!
//! - **[`client::ApiClient`]**: The request gateway. Executes one logical HTTP
//!   call with authentication guaranteed and normalizes every outcome into a
//!   JSON envelope; transport failures never escape as errors.
//! - **[`session::SessionManager`]**: Owns the current bearer token, performs
//!   the authentication handshake, and validates token freshness on demand.
//! - **[`identity::ClientIdentity`]**: The immutable client identity sent
//!   during the handshake, including a deterministic machine fingerprint.
//!
//! ## Usage
//!
//! ```no_run
//! use promptdeck_api_client::client::ApiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("https://prompt-engineer-helper.vercel.app")?;
//! let services = client.get("/services").await;
//! if services.get("error").is_none() {
//!     println!("{services}");
//! }
//! client.close().await;
//! # Ok(())
//! # }
//! ```

/// The request gateway: authenticated HTTP calls with envelope normalization.
pub mod client;
/// Normalized result envelopes returned to tool callers.
pub mod envelope;
/// Error types for API client operations.
pub mod error;
/// Client identity and machine fingerprint.
pub mod identity;
/// Session state and the authentication handshake.
pub mod session;

pub use client::ApiClient;
pub use error::{ApiClientError, Result};
