//! Error types for opensubsonic-client.

use crate::response::ServerErrorCode;

/// Result type alias for opensubsonic-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for opensubsonic-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the client configuration was rejected.
    pub fn is_config_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// Returns true if the failure happened below the protocol layer
    /// (HTTP status, timeout, connection).
    pub fn is_transport_error(&self) -> bool {
        self.kind.is_transport()
    }

    /// Returns true if the server answered with a failure envelope.
    pub fn is_protocol_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Protocol { .. })
    }

    /// Returns true if the server rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        match self.protocol_code() {
            Some(code) => code.is_auth_failure(),
            None => matches!(self.kind, ErrorKind::Http { status: 401, .. }),
        }
    }

    /// Returns the server error code if this is a protocol error.
    pub fn protocol_code(&self) -> Option<ServerErrorCode> {
        match &self.kind {
            ErrorKind::Protocol { code, .. } => Some(ServerErrorCode::from_code(*code)),
            _ => None,
        }
    }

    /// Returns true if repeating the same call might succeed.
    ///
    /// The client never retries on its own; this is a hint for callers
    /// that implement their own policy.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid or incomplete client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable secure random source for salt generation.
    #[error("Secure random source unavailable: {0}")]
    CryptoUnavailable(String),

    /// HTTP request failed with a non-success status and no envelope.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server returned a failure envelope.
    #[error("Subsonic API error: {code} - {message}")]
    Protocol { code: u32, message: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl ErrorKind {
    /// Returns true for network and HTTP-layer failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Http { .. } | ErrorKind::Timeout | ErrorKind::Connection(_)
        )
    }

    /// Returns true if this error kind is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            ErrorKind::Timeout => true,
            ErrorKind::Connection(_) => true,
            ErrorKind::Http { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is typically retryable.
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // reqwest includes the full URL, and with it the auth query parameters
        let message = crate::response::sanitize_error_message(&err.to_string());
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(message)
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                message,
            }
        } else {
            ErrorKind::Other(message)
        };

        Error::with_source(kind, err.without_url())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = Error::new(ErrorKind::Config("missing url".into()));
        assert!(err.is_config_error());
        assert!(!err.is_transport_error());
        assert!(!err.is_protocol_error());

        let err = Error::new(ErrorKind::Http {
            status: 502,
            message: "Bad Gateway".into(),
        });
        assert!(err.is_transport_error());
        assert!(err.is_retryable());

        let err = Error::new(ErrorKind::Timeout);
        assert!(err.is_transport_error());

        let err = Error::new(ErrorKind::Protocol {
            code: 70,
            message: "Album not found".into(),
        });
        assert!(err.is_protocol_error());
        assert!(!err.is_transport_error());
        assert!(!err.is_retryable());
        assert_eq!(err.protocol_code(), Some(ServerErrorCode::NotFound));
    }

    #[test]
    fn test_auth_error_detection() {
        let err = Error::new(ErrorKind::Protocol {
            code: 40,
            message: "Wrong username or password".into(),
        });
        assert!(err.is_auth_error());

        let err = Error::new(ErrorKind::Protocol {
            code: 44,
            message: "Invalid API key".into(),
        });
        assert!(err.is_auth_error());

        let err = Error::new(ErrorKind::Http {
            status: 401,
            message: "Unauthorized".into(),
        });
        assert!(err.is_auth_error());

        let err = Error::new(ErrorKind::Protocol {
            code: 10,
            message: "Required parameter is missing".into(),
        });
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_error_kind_display_messages() {
        let cases: Vec<(ErrorKind, &str)> = vec![
            (
                ErrorKind::Config("missing field".into()),
                "Configuration error: missing field",
            ),
            (
                ErrorKind::CryptoUnavailable("no source".into()),
                "Secure random source unavailable: no source",
            ),
            (
                ErrorKind::Http {
                    status: 500,
                    message: "Internal Server Error".into(),
                },
                "HTTP error: 500 Internal Server Error",
            ),
            (ErrorKind::Timeout, "Request timeout"),
            (
                ErrorKind::Connection("refused".into()),
                "Connection error: refused",
            ),
            (
                ErrorKind::Protocol {
                    code: 40,
                    message: "Wrong username or password".into(),
                },
                "Subsonic API error: 40 - Wrong username or password",
            ),
            (
                ErrorKind::Json("unexpected EOF".into()),
                "JSON error: unexpected EOF",
            ),
            (
                ErrorKind::InvalidUrl("no host".into()),
                "Invalid URL: no host",
            ),
            (ErrorKind::Other("something else".into()), "something else"),
        ];

        for (kind, expected_substring) in cases {
            let display = kind.to_string();
            assert!(
                display.contains(expected_substring),
                "Expected '{display}' to contain '{expected_substring}'"
            );
        }
    }

    #[test]
    fn test_retryable_http_status_codes() {
        for status in [429, 500, 502, 503, 504] {
            let err = Error::new(ErrorKind::Http {
                status,
                message: "error".into(),
            });
            assert!(err.is_retryable(), "HTTP {status} should be retryable");
        }

        for status in [400, 401, 403, 404, 405] {
            let err = Error::new(ErrorKind::Http {
                status,
                message: "error".into(),
            });
            assert!(!err.is_retryable(), "HTTP {status} should NOT be retryable");
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("Invalid URL"));
    }
}
