//! # opensubsonic-auth
//!
//! Credential loading and vendor session login for Subsonic servers.
//!
//! ## Security
//!
//! - Passwords, API keys and session tokens are redacted in Debug output
//! - Tracing skips the password argument of login calls
//! - Error messages never include credential values
//!
//! ## Supported Sources
//!
//! - **Explicit values** - [`SubsonicCredentials::new_password`] / [`SubsonicCredentials::new_api_key`]
//! - **Environment** - `SUBSONIC_URL` plus `SUBSONIC_API_KEY` or `SUBSONIC_USER` / `SUBSONIC_PASS`
//! - **Navidrome session** - bearer token for the Navidrome native API
//!
//! ## Example
//!
//! ```rust,ignore
//! use opensubsonic_auth::{NavidromeAuth, SubsonicCredentials};
//! use opensubsonic_client::SubsonicClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), opensubsonic_auth::Error> {
//!     let creds = SubsonicCredentials::from_env()?;
//!     let client = SubsonicClient::new(creds.clone().into_config_builder().build())?;
//!
//!     let session = NavidromeAuth::from_client(&client).login_with(&creds).await?;
//!     let (header, value) = session.bearer_header();
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod session;

pub use credentials::{SubsonicCredentials, ENV_API_KEY, ENV_PASSWORD, ENV_URL, ENV_USERNAME};
pub use error::{Error, ErrorKind, Result};
pub use session::{NavidromeAuth, NavidromeSession, NAVIDROME_AUTH_HEADER};
