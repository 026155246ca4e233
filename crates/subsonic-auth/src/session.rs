//! Navidrome session login.
//!
//! Navidrome exposes a native JSON API next to the Subsonic one. It is
//! authenticated with a bearer token obtained from `POST /auth/login`.
//! The session is fetched fresh on every [`NavidromeAuth::login`] call.

use std::sync::Arc;

use opensubsonic_client::{HttpRequest, HttpTransport, SubsonicClient};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::credentials::SubsonicCredentials;
use crate::error::{Error, ErrorKind, Result};

/// Header carrying the Navidrome bearer token.
pub const NAVIDROME_AUTH_HEADER: &str = "X-ND-Authorization";

const LOGIN_PATH: &str = "auth/login";

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Session returned by the Navidrome login endpoint.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavidromeSession {
    pub id: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub name: String,
    pub username: String,
    /// Bearer token for the native API.
    pub token: String,
    /// Salt and token Navidrome itself would use for Subsonic calls.
    #[serde(default)]
    pub subsonic_salt: String,
    #[serde(default)]
    pub subsonic_token: String,
}

impl std::fmt::Debug for NavidromeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavidromeSession")
            .field("id", &self.id)
            .field("is_admin", &self.is_admin)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .field("subsonic_salt", &"[REDACTED]")
            .field("subsonic_token", &"[REDACTED]")
            .finish()
    }
}

impl NavidromeSession {
    /// Header name and value to authenticate native API requests.
    pub fn bearer_header(&self) -> (&'static str, String) {
        (NAVIDROME_AUTH_HEADER, format!("Bearer {}", self.token))
    }

    /// Attach the bearer header to a request.
    pub fn authorize(&self, request: HttpRequest) -> HttpRequest {
        let (name, value) = self.bearer_header();
        request.header(name, value)
    }
}

/// Client for the Navidrome login endpoint.
#[derive(Clone)]
pub struct NavidromeAuth {
    server_url: Url,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for NavidromeAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavidromeAuth")
            .field("server_url", &self.server_url.as_str())
            .finish_non_exhaustive()
    }
}

impl NavidromeAuth {
    /// Create a login client for the server root (without `/rest`).
    pub fn new(server_url: &str, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let mut base = server_url.trim().to_string();
        if base.is_empty() {
            return Err(Error::new(ErrorKind::InvalidUrl(
                "server URL is required".to_string(),
            )));
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            base = format!("https://{}", base);
        }
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            server_url: Url::parse(&base)?,
            transport,
        })
    }

    /// Reuse the server and transport of an existing Subsonic client.
    pub fn from_client(client: &SubsonicClient) -> Self {
        Self {
            server_url: client.server_url(),
            transport: client.transport(),
        }
    }

    /// The server root.
    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    /// Log in and return a new session.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<NavidromeSession> {
        let url = self.server_url.join(LOGIN_PATH)?;
        let request = HttpRequest::post(url.as_str()).json(&LoginRequest { username, password })?;

        debug!(url = %url, "Requesting Navidrome session");
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            warn!(status = response.status(), "Navidrome login rejected");
            return Err(Error::new(ErrorKind::Http {
                status: response.status(),
                message: response.status_text().to_string(),
            }));
        }

        let session: NavidromeSession = response.json()?;
        debug!(user = %session.username, is_admin = session.is_admin, "Navidrome session created");
        Ok(session)
    }

    /// Log in with password credentials.
    pub async fn login_with(&self, credentials: &SubsonicCredentials) -> Result<NavidromeSession> {
        match (credentials.username(), credentials.password()) {
            (Some(username), Some(password)) => self.login(username, password).await,
            _ => Err(Error::new(ErrorKind::InvalidCredentials(
                "Navidrome login needs a username and password".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opensubsonic_client::{ClientConfig, ReqwestTransport};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> Arc<dyn HttpTransport> {
        Arc::new(ReqwestTransport::new(&ClientConfig::default()).unwrap())
    }

    fn session_body() -> serde_json::Value {
        serde_json::json!({
            "id": "u-1",
            "isAdmin": true,
            "name": "Demo User",
            "username": "demo",
            "token": "eyJhbGciOiJIUzI1NiJ9.session",
            "subsonicSalt": "abc123",
            "subsonicToken": "0123456789abcdef"
        })
    }

    #[tokio::test]
    async fn test_login_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(serde_json::json!({"username": "demo", "password": "demo"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let auth = NavidromeAuth::new(&mock_server.uri(), transport()).unwrap();
        let session = auth.login("demo", "demo").await.unwrap();

        assert_eq!(session.username, "demo");
        assert!(session.is_admin);
        let (name, value) = session.bearer_header();
        assert_eq!(name, "X-ND-Authorization");
        assert_eq!(value, "Bearer eyJhbGciOiJIUzI1NiJ9.session");
    }

    #[tokio::test]
    async fn test_login_is_not_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let auth = NavidromeAuth::new(&mock_server.uri(), transport()).unwrap();
        auth.login("demo", "demo").await.unwrap();
        auth.login("demo", "demo").await.unwrap();
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let auth = NavidromeAuth::new(&mock_server.uri(), transport()).unwrap();
        let err = auth.login("demo", "wrong").await.unwrap_err();

        assert!(err.is_auth_error());
        assert!(matches!(err.kind, ErrorKind::Http { status: 401, .. }));
        assert!(!err.to_string().contains("wrong"));
    }

    #[tokio::test]
    async fn test_from_client_uses_server_root() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
            .mount(&mock_server)
            .await;

        let client = SubsonicClient::new(
            ClientConfig::builder()
                .with_url(mock_server.uri())
                .with_password("demo", "demo")
                .build(),
        )
        .unwrap();
        let auth = NavidromeAuth::from_client(&client);
        assert_eq!(auth.server_url().as_str(), format!("{}/", mock_server.uri()));

        let creds = SubsonicCredentials::new_password(mock_server.uri(), "demo", "demo");
        let session = auth.login_with(&creds).await.unwrap();
        assert_eq!(session.id, "u-1");
    }

    #[tokio::test]
    async fn test_login_with_api_key_is_rejected() {
        let auth = NavidromeAuth::new("music.example.com", transport()).unwrap();
        assert_eq!(auth.server_url().as_str(), "https://music.example.com/");

        let creds = SubsonicCredentials::new_api_key("music.example.com", "k");
        let err = auth.login_with(&creds).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidCredentials(_)));
    }

    #[test]
    fn test_session_debug_redacts() {
        let session: NavidromeSession = serde_json::from_value(session_body()).unwrap();
        let debug = format!("{:?}", session);
        assert!(debug.contains("demo"));
        assert!(!debug.contains("eyJhbGciOiJIUzI1NiJ9"));
        assert!(!debug.contains("0123456789abcdef"));
    }

    #[test]
    fn test_authorize_adds_header() {
        let session: NavidromeSession = serde_json::from_value(session_body()).unwrap();
        let request = session.authorize(HttpRequest::get("https://music.example.com/api/album"));
        assert_eq!(
            request.header_value("x-nd-authorization"),
            Some("Bearer eyJhbGciOiJIUzI1NiJ9.session")
        );
    }
}
