//! Subsonic credentials.
//!
//! Credentials implement a custom Debug that redacts secrets.

use opensubsonic_client::{ClientConfig, ClientConfigBuilder};

use crate::error::{Error, ErrorKind, Result};

/// Environment variable holding the server URL.
pub const ENV_URL: &str = "SUBSONIC_URL";
/// Environment variables holding the username, in lookup order.
pub const ENV_USERNAME: [&str; 2] = ["SUBSONIC_USER", "SUBSONIC_USERNAME"];
/// Environment variables holding the password, in lookup order.
pub const ENV_PASSWORD: [&str; 2] = ["SUBSONIC_PASS", "SUBSONIC_PASSWORD"];
/// Environment variable holding an OpenSubsonic API key.
pub const ENV_API_KEY: &str = "SUBSONIC_API_KEY";

#[derive(Clone, PartialEq, Eq)]
enum Secret {
    ApiKey(String),
    Password { username: String, password: String },
}

/// Server URL plus one way of authenticating against it.
#[derive(Clone, PartialEq, Eq)]
pub struct SubsonicCredentials {
    url: String,
    secret: Secret,
}

impl std::fmt::Debug for SubsonicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("SubsonicCredentials");
        s.field("url", &self.url);
        match &self.secret {
            Secret::ApiKey(_) => s.field("api_key", &"[REDACTED]"),
            Secret::Password { username, .. } => s
                .field("username", username)
                .field("password", &"[REDACTED]"),
        };
        s.finish()
    }
}

impl SubsonicCredentials {
    /// Credentials for username and salted token authentication.
    pub fn new_password(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            secret: Secret::Password {
                username: username.into(),
                password: password.into(),
            },
        }
    }

    /// Credentials for OpenSubsonic API key authentication.
    pub fn new_api_key(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: Secret::ApiKey(api_key.into()),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required:
    /// - `SUBSONIC_URL`
    /// - either `SUBSONIC_API_KEY`, or `SUBSONIC_USER` (or `SUBSONIC_USERNAME`)
    ///   together with `SUBSONIC_PASS` (or `SUBSONIC_PASSWORD`)
    ///
    /// Setting both an API key and a username or password is rejected.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let first = |names: &[&str]| names.iter().find_map(|n| get(n));

        let url = get(ENV_URL).ok_or_else(|| Error::new(ErrorKind::EnvVar(ENV_URL.to_string())))?;
        let api_key = get(ENV_API_KEY);
        let username = first(&ENV_USERNAME[..]);
        let password = first(&ENV_PASSWORD[..]);

        match (api_key, username, password) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                Err(Error::new(ErrorKind::InvalidCredentials(format!(
                    "{} cannot be combined with a username or password",
                    ENV_API_KEY
                ))))
            }
            (Some(key), None, None) => Ok(Self::new_api_key(url, key)),
            (None, Some(username), Some(password)) => {
                Ok(Self::new_password(url, username, password))
            }
            (None, Some(_), None) => Err(Error::new(ErrorKind::EnvVar(ENV_PASSWORD[0].to_string()))),
            (None, None, _) => Err(Error::new(ErrorKind::EnvVar(format!(
                "{} or {}",
                ENV_API_KEY, ENV_USERNAME[0]
            )))),
        }
    }

    /// Server URL as given.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The username, if password authentication is used.
    pub fn username(&self) -> Option<&str> {
        match &self.secret {
            Secret::ApiKey(_) => None,
            Secret::Password { username, .. } => Some(username),
        }
    }

    /// The password, if password authentication is used.
    pub fn password(&self) -> Option<&str> {
        match &self.secret {
            Secret::ApiKey(_) => None,
            Secret::Password { password, .. } => Some(password),
        }
    }

    /// Returns true for API key credentials.
    pub fn is_api_key(&self) -> bool {
        matches!(self.secret, Secret::ApiKey(_))
    }

    /// Returns true if no field is empty.
    pub fn is_valid(&self) -> bool {
        !self.url.is_empty()
            && match &self.secret {
                Secret::ApiKey(key) => !key.is_empty(),
                Secret::Password { username, password } => {
                    !username.is_empty() && !password.is_empty()
                }
            }
    }

    /// Start a client config with URL and credentials filled in.
    pub fn into_config_builder(self) -> ClientConfigBuilder {
        let builder = ClientConfig::builder().with_url(self.url);
        match self.secret {
            Secret::ApiKey(key) => builder.with_api_key(key),
            Secret::Password { username, password } => builder.with_password(username, password),
        }
    }
}
