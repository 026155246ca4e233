//! # opensubsonic
//!
//! A Subsonic and OpenSubsonic API client library for Rust.
//!
//! Every request is signed either with an API key or with a salted MD5
//! token derived from the user's password; the password itself never
//! leaves the process.
//!
//! ## Security
//!
//! - Passwords, tokens, salts and API keys are redacted in Debug output
//! - Logged URLs drop their query string
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **opensubsonic-client** - Request signing, parameter canonicalization, transport, envelope unwrapping
//! - **opensubsonic-auth** - Credentials from the environment, Navidrome session login
//! - **opensubsonic-api** - Typed endpoint methods and the catalog data model
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opensubsonic::{AlbumListArgs, AlbumListType, SubsonicApi, SubsonicCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SUBSONIC_URL plus SUBSONIC_API_KEY or SUBSONIC_USER / SUBSONIC_PASS
//!     let creds = SubsonicCredentials::from_env()?;
//!     let api = SubsonicApi::connect(creds.into_config_builder().build()).await?;
//!
//!     let albums = api
//!         .get_album_list2(AlbumListArgs::new(AlbumListType::Newest).with_page(10, 0))
//!         .await?;
//!
//!     for album in albums {
//!         println!("{} - {}", album.artist.unwrap_or_default(), album.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "api")]
pub use opensubsonic_api as api;
#[cfg(feature = "auth")]
pub use opensubsonic_auth as auth;
#[cfg(feature = "client")]
pub use opensubsonic_client as client;

// Re-export commonly used types at the top level
#[cfg(feature = "api")]
pub use opensubsonic_api::{AlbumListArgs, AlbumListType, SearchQuery, StarTarget, SubsonicApi};
#[cfg(feature = "auth")]
pub use opensubsonic_auth::{NavidromeAuth, SubsonicCredentials};
#[cfg(feature = "client")]
pub use opensubsonic_client::{AuthMode, ClientConfig, Params, SubsonicClient};
