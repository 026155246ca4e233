//! The HTTP seam.
//!
//! The client never talks to the network directly; it hands a built
//! [`HttpRequest`] to an [`HttpTransport`] chosen at construction time.
//! [`ReqwestTransport`] is the default. Tests and embedders supply their own.

use futures::future::BoxFuture;

use crate::error::Result;
use crate::request::HttpRequest;
use crate::response::Response;

/// Executes one HTTP round-trip.
///
/// Implementations report network failures as errors, but return non-2xx
/// responses as ordinary [`Response`] values so the envelope can still be
/// inspected. Retries and timeouts, if any, belong here.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<Response>>;
}

#[cfg(feature = "native")]
pub use native::ReqwestTransport;

#[cfg(feature = "native")]
mod native {
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use tracing::{debug, info};

    use super::HttpTransport;
    use crate::config::ClientConfig;
    use crate::error::{Error, ErrorKind, Result};
    use crate::request::HttpRequest;
    use crate::response::Response;

    /// Transport backed by a `reqwest::Client`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        inner: reqwest::Client,
        enable_tracing: bool,
    }

    impl ReqwestTransport {
        /// Build a transport from the HTTP settings of a client config.
        pub fn new(config: &ClientConfig) -> Result<Self> {
            let builder = reqwest::Client::builder()
                .timeout(config.timeout)
                .connect_timeout(config.connect_timeout)
                .user_agent(&config.user_agent)
                .gzip(true)
                .deflate(true);

            let inner = builder
                .build()
                .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

            Ok(Self {
                inner,
                enable_tracing: config.enable_tracing,
            })
        }

        /// Wrap an existing reqwest client.
        pub fn from_client(inner: reqwest::Client) -> Self {
            Self {
                inner,
                enable_tracing: true,
            }
        }

        async fn execute(&self, request: HttpRequest) -> Result<Response> {
            let mut req = self
                .inner
                .request(request.method.to_reqwest(), &request.url);

            for (name, value) in &request.headers {
                req = req.header(name.as_str(), value.as_str());
            }

            if let Some(body) = request.body.clone() {
                req = req.body(body);
            }

            if self.enable_tracing {
                debug!(
                    method = request.method.as_str(),
                    url = %request.redacted_url(),
                    "Sending request"
                );
            }

            let response = req.send().await?;

            let status = response.status();
            if self.enable_tracing {
                let content_length = response.content_length();
                if status.is_success() {
                    debug!(status = status.as_u16(), content_length, "Response received");
                } else {
                    info!(status = status.as_u16(), content_length, "Non-success response");
                }
            }

            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            let body = response.bytes().await?;

            Ok(Response::new(status.as_u16(), status_text, headers, body))
        }
    }

    impl HttpTransport for ReqwestTransport {
        fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<Response>> {
            self.execute(request).boxed()
        }
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_round_trip() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/ping.view"))
            .and(query_param("f", "json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Test", "yes")
                    .set_body_string("pong"),
            )
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(&ClientConfig::default()).unwrap();
        let response = transport
            .send(HttpRequest::get(format!(
                "{}/rest/ping.view?f=json",
                mock_server.uri()
            )))
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.header("x-test"), Some("yes"));
        assert_eq!(response.text().unwrap(), "pong");
    }

    #[tokio::test]
    async fn test_form_post() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/ping.view"))
            .and(header("Content-Type", crate::request::FORM_CONTENT_TYPE))
            .and(body_string("f=json&id=1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(&ClientConfig::default()).unwrap();
        let response = transport
            .send(
                HttpRequest::post(format!("{}/rest/ping.view", mock_server.uri()))
                    .form_body("f=json&id=1"),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(&ClientConfig::default()).unwrap();
        let response = transport
            .send(HttpRequest::get(mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(response.status(), 503);
        assert_eq!(response.status_text(), "Service Unavailable");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let transport = ReqwestTransport::new(&ClientConfig::default()).unwrap();
        let err = transport
            .send(HttpRequest::get("http://127.0.0.1:1/rest/ping.view?t=secret"))
            .await
            .unwrap_err();

        assert!(err.is_transport_error());
        assert!(!err.to_string().contains("secret"));
    }
}
