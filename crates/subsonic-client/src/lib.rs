//! # opensubsonic-client
//!
//! Core request signing and dispatch for Subsonic and OpenSubsonic servers.
//!
//! This crate provides:
//! - Credential resolution (API key or username + salted MD5 token)
//! - Salt generation with a URL-safe alphabet, optionally reused
//! - Deterministic parameter canonicalization (`v`, `c`, `f`, user, auth)
//! - GET or form-POST dispatch through an injectable [`HttpTransport`]
//! - Envelope unwrapping into typed results or [`ErrorKind::Protocol`]
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (opensubsonic-api endpoint methods, custom calls)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SubsonicClient                           │
//! │  - Resolves credentials once, at construction               │
//! │  - Canonicalizes and signs parameters per request           │
//! │  - Unwraps `subsonic-response` envelopes                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HttpTransport                            │
//! │  - ReqwestTransport (feature `native`) or caller-supplied   │
//! │  - Non-2xx answers are returned, network failures are not   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use opensubsonic_client::{ClientConfig, Params, SubsonicClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), opensubsonic_client::Error> {
//!     let client = SubsonicClient::new(
//!         ClientConfig::builder()
//!             .with_url("demo.navidrome.org")
//!             .with_password("demo", "demo")
//!             .with_reuse_salt(true)
//!             .build(),
//!     )?;
//!
//!     let album: serde_json::Value = client
//!         .request_json("getAlbum", Params::new().with("id", "al-1"))
//!         .await?;
//!
//!     let cover = client
//!         .request("getCoverArt", Params::new().with("id", "al-1").with("size", 300))
//!         .await?
//!         .bytes();
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod error;
mod params;
mod request;
mod response;
pub mod salt;
mod transport;

pub use auth::AuthMode;
pub use client::SubsonicClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use params::{is_reserved_key, ParamValue, Params, RESERVED_KEYS};
pub use request::{HttpRequest, RequestMethod, FORM_CONTENT_TYPE};
pub use response::{
    check_raw, unwrap_envelope, Response, ResponseStatus, ServerError, ServerErrorCode,
    SubsonicResponse, ENVELOPE_KEY,
};
pub use salt::{SaltToken, SecureRandom};
pub use transport::HttpTransport;

#[cfg(feature = "native")]
pub use salt::OsRandom;
#[cfg(feature = "native")]
pub use transport::ReqwestTransport;

/// Protocol version sent as `v` unless overridden.
pub const PROTOCOL_VERSION: &str = "1.16.1";

/// Client identifier sent as `c` unless overridden.
pub const CLIENT_NAME: &str = "opensubsonic-rs";

/// User-Agent string for the default transport.
pub const USER_AGENT: &str = concat!("opensubsonic/", env!("CARGO_PKG_VERSION"));
