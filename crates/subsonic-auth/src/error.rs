//! Error types for opensubsonic-auth.
//!
//! Error messages never include passwords, API keys or session tokens.

/// Result type alias for opensubsonic-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for opensubsonic-auth operations.
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

    /// Returns true if the server rejected the username or password.
    pub fn is_auth_error(&self) -> bool {
        match &self.kind {
            ErrorKind::Http { status, .. } => *status == 401 || *status == 403,
            ErrorKind::Client(_) => self
                .source
                .as_ref()
                .and_then(|s| s.downcast_ref::<opensubsonic_client::Error>())
                .is_some_and(|e| e.is_auth_error()),
            _ => false,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid or incomplete credentials.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Non-success answer from the login endpoint.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Error raised by the core client (transport, config).
    #[error("Client error: {0}")]
    Client(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

impl From<opensubsonic_client::Error> for Error {
    fn from(err: opensubsonic_client::Error) -> Self {
        // The client error display is already sanitized.
        Error::with_source(ErrorKind::Client(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opensubsonic_client::ErrorKind as ClientErrorKind;

    #[test]
    fn test_error_kind_display() {
        let err = ErrorKind::EnvVar("SUBSONIC_URL".to_string());
        assert_eq!(err.to_string(), "Environment variable not set: SUBSONIC_URL");

        let err = ErrorKind::Http {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }

    #[test]
    fn test_auth_error_classification() {
        let err = Error::new(ErrorKind::Http {
            status: 401,
            message: "Unauthorized".to_string(),
        });
        assert!(err.is_auth_error());

        let client_err = opensubsonic_client::Error::new(ClientErrorKind::Protocol {
            code: 40,
            message: "Wrong username or password".to_string(),
        });
        let err: Error = client_err.into();
        assert!(matches!(err.kind, ErrorKind::Client(_)));
        assert!(err.is_auth_error());

        let err = Error::new(ErrorKind::Json("eof".to_string()));
        assert!(!err.is_auth_error());
    }
}
