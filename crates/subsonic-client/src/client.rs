//! The signed-request dispatcher.
//!
//! Every call goes through the same steps: canonicalize the parameters,
//! add auth (salt and token in password mode), send through the transport,
//! then unwrap the envelope or pass raw media through.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::auth::AuthMode;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::params::{canonicalize, Params};
use crate::request::HttpRequest;
use crate::response::{check_raw, unwrap_envelope, Response};
use crate::salt::{SaltGenerator, SecureRandom};
use crate::transport::HttpTransport;

/// Methods served under a suffix other than `.view`.
const M3U8_METHODS: [&str; 1] = ["hls"];

/// Client for a Subsonic / OpenSubsonic server.
///
/// Cheap to clone; clones share the transport and the salt cache.
///
/// # Example
///
/// ```rust,ignore
/// use opensubsonic_client::{ClientConfig, Params, SubsonicClient, SubsonicResponse};
///
/// let client = SubsonicClient::new(
///     ClientConfig::builder()
///         .with_url("https://demo.navidrome.org")
///         .with_password("demo", "demo")
///         .build(),
/// )?;
///
/// let pong: SubsonicResponse = client.request_json("ping", Params::new()).await?;
/// ```
#[derive(Clone)]
pub struct SubsonicClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base_url: Url,
    auth: AuthMode,
    protocol_version: String,
    client_name: String,
    use_post: bool,
    enable_tracing: bool,
    transport: Arc<dyn HttpTransport>,
    salts: SaltGenerator,
}

impl std::fmt::Debug for SubsonicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubsonicClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("auth", &self.inner.auth)
            .field("use_post", &self.inner.use_post)
            .field("salts", &self.inner.salts)
            .finish_non_exhaustive()
    }
}

impl SubsonicClient {
    /// Validate the configuration and create a client.
    ///
    /// Fails with a configuration error, before any network access, when the
    /// URL is missing or invalid, the credentials are ambiguous or
    /// incomplete, or no transport or random source is available.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(config.url.as_deref())?;
        let auth = AuthMode::resolve(&config)?;
        let transport = resolve_transport(&config)?;
        let random = resolve_random(&config);

        let salts = SaltGenerator::new(config.salt.clone(), config.reuse_salt, random);
        if !auth.is_api_key() && !salts.is_available() {
            return Err(Error::new(ErrorKind::Config(
                "password authentication needs a random source or a fixed salt".to_string(),
            )));
        }

        Ok(Self {
            inner: Arc::new(ClientInner {
                base_url,
                auth,
                protocol_version: config.protocol_version,
                client_name: config.client_name,
                use_post: config.use_post,
                enable_tracing: config.enable_tracing,
                transport,
                salts,
            }),
        })
    }

    /// The normalized base URL, ending in `/rest/`.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The server root, i.e. the base URL without the `rest/` segment.
    pub fn server_url(&self) -> Url {
        let mut url = self.inner.base_url.clone();
        let path = url.path();
        let root = path.strip_suffix("rest/").unwrap_or(path).to_string();
        url.set_path(&root);
        url
    }

    /// The resolved auth mode.
    pub fn auth_mode(&self) -> &AuthMode {
        &self.inner.auth
    }

    /// The transport used for every request.
    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        Arc::clone(&self.inner.transport)
    }

    /// Returns true if requests are sent as form POSTs.
    pub fn uses_post(&self) -> bool {
        self.inner.use_post
    }

    /// URL of a protocol method, without parameters.
    pub fn method_url(&self, method: &str) -> Result<Url> {
        let suffix = if M3U8_METHODS.contains(&method) {
            "m3u8"
        } else {
            "view"
        };
        self.inner
            .base_url
            .join(&format!("{}.{}", method, suffix))
            .map_err(|e| Error::with_source(ErrorKind::InvalidUrl(method.to_string()), e))
    }

    /// Canonicalized and signed parameters for one request.
    ///
    /// Draws a new salt unless salts are fixed or reused.
    pub fn signed_params(&self, method: &str, params: &Params) -> Result<Vec<(String, String)>> {
        let salt = match &self.inner.auth {
            AuthMode::ApiKey { .. } => None,
            AuthMode::Password { password, .. } => Some(self.inner.salts.next(password)?),
        };
        let auth = self.inner.auth.to_pairs(salt)?;

        Ok(canonicalize(
            method,
            &self.inner.protocol_version,
            &self.inner.client_name,
            params,
            auth,
        ))
    }

    /// Build the signed HTTP request for a method without sending it.
    pub fn build_request(&self, method: &str, params: &Params) -> Result<HttpRequest> {
        let url = self.method_url(method)?;
        let pairs = self.signed_params(method, params)?;
        let query = serde_urlencoded::to_string(&pairs)?;

        if self.inner.use_post {
            Ok(HttpRequest::post(url.as_str()).form_body(query))
        } else {
            let mut url = url;
            url.set_query(Some(&query));
            Ok(HttpRequest::get(url.as_str()))
        }
    }

    /// Send a signed request and return the raw response.
    ///
    /// Used for media endpoints. The body is not parsed unless the server
    /// answered with JSON, in which case a failure envelope is still
    /// reported as a protocol error.
    #[instrument(skip(self, params), fields(method = %method))]
    pub async fn request(&self, method: &str, params: Params) -> Result<Response> {
        let response = self.send(method, &params).await?;
        check_raw(response)
    }

    /// Send a signed request and return the unwrapped envelope as `T`.
    #[instrument(skip(self, params), fields(method = %method))]
    pub async fn request_json<T: DeserializeOwned>(&self, method: &str, params: Params) -> Result<T> {
        let response = self.send(method, &params).await?;
        unwrap_envelope(&response)
    }

    async fn send(&self, method: &str, params: &Params) -> Result<Response> {
        let request = self.build_request(method, params)?;

        if self.inner.enable_tracing {
            debug!(
                http_method = request.method.as_str(),
                url = %request.redacted_url(),
                "Dispatching Subsonic request"
            );
        }

        self.inner.transport.send(request).await
    }
}

/// Add a scheme if missing, force a trailing slash, and append `rest/`.
fn normalize_base_url(url: Option<&str>) -> Result<Url> {
    let raw = url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| Error::new(ErrorKind::Config("server URL is required".to_string())))?;

    let mut base = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };
    let supplied = Url::parse(&base).map_err(|e| {
        Error::new(ErrorKind::Config(format!("invalid server URL {}: {}", raw, e)))
    })?;
    if supplied.cannot_be_a_base() || supplied.host_str().is_none_or(str::is_empty) {
        return Err(Error::new(ErrorKind::Config(format!(
            "server URL has no host: {}",
            raw
        ))));
    }

    if !base.ends_with('/') {
        base.push('/');
    }
    if !base.ends_with("rest/") {
        base.push_str("rest/");
    }

    Ok(Url::parse(&base)?)
}

fn resolve_transport(config: &ClientConfig) -> Result<Arc<dyn HttpTransport>> {
    if let Some(ref transport) = config.transport {
        return Ok(Arc::clone(transport));
    }

    #[cfg(feature = "native")]
    {
        Ok(Arc::new(crate::transport::ReqwestTransport::new(config)?))
    }

    #[cfg(not(feature = "native"))]
    {
        Err(Error::new(ErrorKind::Config(
            "no HTTP transport configured".to_string(),
        )))
    }
}

fn resolve_random(config: &ClientConfig) -> Option<Arc<dyn SecureRandom>> {
    if let Some(ref random) = config.random {
        return Some(Arc::clone(random));
    }

    #[cfg(feature = "native")]
    {
        Some(Arc::new(crate::salt::OsRandom))
    }

    #[cfg(not(feature = "native"))]
    {
        None
    }
}
