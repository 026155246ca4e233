//! Error types for opensubsonic-api.

use opensubsonic_client::ServerErrorCode;

/// Result type alias for opensubsonic-api operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for opensubsonic-api operations.
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

    /// The underlying client error, if this error came from the client.
    pub fn client_error(&self) -> Option<&opensubsonic_client::Error> {
        match self.kind {
            ErrorKind::Client(_) => self
                .source
                .as_ref()
                .and_then(|s| s.downcast_ref::<opensubsonic_client::Error>()),
            _ => None,
        }
    }

    /// Returns true if the server answered with a failure envelope.
    pub fn is_protocol_error(&self) -> bool {
        self.client_error().is_some_and(|e| e.is_protocol_error())
    }

    /// Returns true if the request never got a protocol answer.
    pub fn is_transport_error(&self) -> bool {
        self.client_error().is_some_and(|e| e.is_transport_error())
    }

    /// Returns true if the server rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        self.client_error().is_some_and(|e| e.is_auth_error())
    }

    /// Returns the server error code if this is a protocol error.
    pub fn protocol_code(&self) -> Option<ServerErrorCode> {
        self.client_error().and_then(|e| e.protocol_code())
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Error from the signing client (config, transport, protocol).
    #[error("Client error: {0}")]
    Client(String),

    /// The envelope did not contain the expected payload field.
    #[error("Missing field in response: {0}")]
    MissingField(String),

    /// The payload did not match the expected type.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<opensubsonic_client::Error> for Error {
    fn from(err: opensubsonic_client::Error) -> Self {
        Error::with_source(ErrorKind::Client(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
