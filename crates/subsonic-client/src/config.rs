//! Client configuration.
//!
//! A [`ClientConfig`] is plain data: building one never fails. Credentials,
//! URL and injected dependencies are validated by
//! [`SubsonicClient::new`](crate::SubsonicClient::new).

use std::sync::Arc;
use std::time::Duration;

use crate::salt::SecureRandom;
use crate::transport::HttpTransport;

/// Configuration for a [`SubsonicClient`](crate::SubsonicClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Server base URL, e.g. `https://music.example.com`.
    pub url: Option<String>,
    /// OpenSubsonic API key.
    pub api_key: Option<String>,
    /// Username for token authentication.
    pub username: Option<String>,
    /// Password for token authentication. Never sent to the server.
    pub password: Option<String>,
    /// Salt used for every request instead of a random one.
    pub salt: Option<String>,
    /// Keep the first generated salt for the lifetime of the client.
    pub reuse_salt: bool,
    /// Send parameters as a form-encoded POST body (OpenSubsonic `formPost`).
    pub use_post: bool,
    /// Protocol version sent as `v`.
    pub protocol_version: String,
    /// Client identifier sent as `c`.
    pub client_name: String,
    /// HTTP transport. `None` selects the reqwest transport when the
    /// `native` feature is enabled.
    pub transport: Option<Arc<dyn HttpTransport>>,
    /// Random source for salts. `None` selects the OS source when the
    /// `native` feature is enabled.
    pub random: Option<Arc<dyn SecureRandom>>,
    /// Request timeout (default transport only).
    pub timeout: Duration,
    /// Connection timeout (default transport only).
    pub connect_timeout: Duration,
    /// User-Agent header value (default transport only).
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("salt", &self.salt.as_ref().map(|_| "[REDACTED]"))
            .field("reuse_salt", &self.reuse_salt)
            .field("use_post", &self.use_post)
            .field("protocol_version", &self.protocol_version)
            .field("client_name", &self.client_name)
            .field("transport", &self.transport.as_ref().map(|_| "<custom>"))
            .field("random", &self.random.as_ref().map(|_| "<custom>"))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("enable_tracing", &self.enable_tracing)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            username: None,
            password: None,
            salt: None,
            reuse_salt: false,
            use_post: false,
            protocol_version: crate::PROTOCOL_VERSION.to_string(),
            client_name: crate::CLIENT_NAME.to_string(),
            transport: None,
            random: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the server base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.config.url = Some(url.into());
        self
    }

    /// Authenticate with an OpenSubsonic API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Authenticate with username and salted token.
    pub fn with_password(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self.config.password = Some(password.into());
        self
    }

    /// Set only the username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self
    }

    /// Use a fixed salt for every request.
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.config.salt = Some(salt.into());
        self
    }

    /// Reuse the first generated salt for the lifetime of the client.
    pub fn with_reuse_salt(mut self, reuse: bool) -> Self {
        self.config.reuse_salt = reuse;
        self
    }

    /// Send parameters as a form-encoded POST body.
    ///
    /// The server must advertise the `formPost` extension; the client does
    /// not check.
    pub fn with_post(mut self, use_post: bool) -> Self {
        self.config.use_post = use_post;
        self
    }

    /// Override the protocol version sent as `v`.
    pub fn with_protocol_version(mut self, version: impl Into<String>) -> Self {
        self.config.protocol_version = version.into();
        self
    }

    /// Override the client identifier sent as `c`.
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.config.client_name = name.into();
        self
    }

    /// Inject the HTTP transport.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.config.transport = Some(transport);
        self
    }

    /// Inject the random source used for salts.
    pub fn with_random(mut self, random: Arc<dyn SecureRandom>) -> Self {
        self.config.random = Some(random);
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
