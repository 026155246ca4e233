//! HTTP responses and Subsonic envelope unwrapping.
//!
//! Every JSON answer is wrapped as
//! `{"subsonic-response": {"status": "ok"|"failed", "version": ..., ...}}`.
//! The unwrapper returns the inner object typed, or turns a failed status
//! into [`ErrorKind::Protocol`].

use std::sync::LazyLock;

use bytes::Bytes;
use regex_lite::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, ErrorKind, Result};

/// Key of the top-level envelope object.
pub const ENVELOPE_KEY: &str = "subsonic-response";

/// An HTTP response as returned by a transport.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    status_text: String,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl Response {
    /// Create a response. Header names are matched case-insensitively.
    pub fn new(
        status: u16,
        status_text: impl Into<String>,
        headers: Vec<(String, String)>,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers,
            body: body.into(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the HTTP reason phrase.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All headers in the order the transport returned them.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the Content-Length header.
    pub fn content_length(&self) -> Option<u64> {
        self.header("content-length")?.parse().ok()
    }

    /// Returns true if the body is declared as JSON.
    pub fn is_json(&self) -> bool {
        self.content_type()
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false)
    }

    /// Borrow the raw body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Get the response body as bytes.
    pub fn bytes(self) -> Bytes {
        self.body
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| {
            Error::with_source(
                ErrorKind::Other("Failed to decode response as UTF-8".to_string()),
                e,
            )
        })
    }

    /// Deserialize the whole body as JSON, without envelope handling.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Into::into)
    }
}

/// Value of the envelope `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Failed,
}

/// Fields present in every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsonicResponse {
    pub status: ResponseStatus,
    pub version: String,
    /// Server implementation name (OpenSubsonic).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
    /// True if the server implements OpenSubsonic.
    #[serde(default)]
    pub open_subsonic: bool,
}

/// Error object inside a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerError {
    pub code: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// OpenSubsonic: link to documentation about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
}

/// Documented protocol error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerErrorCode {
    Generic,
    MissingParameter,
    ClientTooOld,
    ServerTooOld,
    WrongCredentials,
    TokenAuthNotSupported,
    AuthMechanismNotSupported,
    ConflictingAuthMechanisms,
    InvalidApiKey,
    NotAuthorized,
    TrialExpired,
    NotFound,
    Unknown(u32),
}

impl ServerErrorCode {
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Self::Generic,
            10 => Self::MissingParameter,
            20 => Self::ClientTooOld,
            30 => Self::ServerTooOld,
            40 => Self::WrongCredentials,
            41 => Self::TokenAuthNotSupported,
            42 => Self::AuthMechanismNotSupported,
            43 => Self::ConflictingAuthMechanisms,
            44 => Self::InvalidApiKey,
            50 => Self::NotAuthorized,
            60 => Self::TrialExpired,
            70 => Self::NotFound,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::Generic => 0,
            Self::MissingParameter => 10,
            Self::ClientTooOld => 20,
            Self::ServerTooOld => 30,
            Self::WrongCredentials => 40,
            Self::TokenAuthNotSupported => 41,
            Self::AuthMechanismNotSupported => 42,
            Self::ConflictingAuthMechanisms => 43,
            Self::InvalidApiKey => 44,
            Self::NotAuthorized => 50,
            Self::TrialExpired => 60,
            Self::NotFound => 70,
            Self::Unknown(code) => *code,
        }
    }

    /// Codes 40 to 44: the credentials or the way they were sent were rejected.
    pub fn is_auth_failure(&self) -> bool {
        (40..=44).contains(&self.code())
    }
}

/// Parse a JSON response and return the envelope typed as `T`.
///
/// `T` sees the whole envelope object, so it can pick the payload field
/// and, if it wants, the base fields of [`SubsonicResponse`].
pub fn unwrap_envelope<T: DeserializeOwned>(response: &Response) -> Result<T> {
    let envelope = match extract_envelope(response)? {
        Some(envelope) => envelope,
        None if !response.is_success() => return Err(transport_error(response)),
        None => {
            return Err(Error::new(ErrorKind::Json(format!(
                "response has no `{}` envelope",
                ENVELOPE_KEY
            ))))
        }
    };

    check_status(&envelope)?;
    serde_json::from_value(envelope).map_err(Into::into)
}

/// Pass a media response through, unless the server sent a failure
/// envelope or an error status instead of the media.
pub fn check_raw(response: Response) -> Result<Response> {
    if !response.is_json() && response.is_success() {
        return Ok(response);
    }

    match extract_envelope(&response) {
        Ok(Some(envelope)) => {
            check_status(&envelope)?;
            Ok(response)
        }
        _ if !response.is_success() => Err(transport_error(&response)),
        _ => Ok(response),
    }
}

/// Find the envelope object. `Ok(None)` if the body is not JSON or has no
/// envelope; a malformed body on a success status is a JSON error.
fn extract_envelope(response: &Response) -> Result<Option<serde_json::Value>> {
    let value: serde_json::Value = match serde_json::from_slice(response.body()) {
        Ok(value) => value,
        Err(_) if !response.is_success() => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let serde_json::Value::Object(mut root) = value else {
        return Ok(None);
    };

    if let Some(envelope) = root.remove(ENVELOPE_KEY) {
        return Ok(Some(envelope));
    }

    // Any single top-level object is treated as the envelope.
    if root.len() == 1 {
        if let Some((key, envelope)) = root.into_iter().next() {
            if envelope.get("status").is_some() {
                debug!(key = %key, "Using non-standard envelope key");
                return Ok(Some(envelope));
            }
        }
    }

    Ok(None)
}

fn check_status(envelope: &serde_json::Value) -> Result<()> {
    let status = envelope.get("status").and_then(|s| s.as_str());
    if status == Some("ok") {
        return Ok(());
    }

    let error = envelope
        .get("error")
        .cloned()
        .and_then(|e| serde_json::from_value::<ServerError>(e).ok());

    let (code, message) = match error {
        Some(err) => (
            err.code,
            err.message.unwrap_or_else(|| "no message".to_string()),
        ),
        None => (
            0,
            format!("unexpected status {}", status.unwrap_or("<missing>")),
        ),
    };

    warn!(code, message = %message, "Server returned failure envelope");
    Err(Error::new(ErrorKind::Protocol {
        code,
        message: sanitize_error_message(&message),
    }))
}

fn transport_error(response: &Response) -> Error {
    let message = if response.status_text().is_empty() {
        sanitize_error_message(&String::from_utf8_lossy(response.body()))
    } else {
        response.status_text().to_string()
    };
    Error::new(ErrorKind::Http {
        status: response.status(),
        message,
    })
}

static SECRET_PARAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([?&](?:t|s|p|apiKey|password)=)[^&\s)]*").expect("valid regex")
});

/// Sanitize an error message to prevent exposing credentials.
///
/// This function:
/// - Redacts the values of the `t`, `s`, `p`, `apiKey` and `password` query parameters
/// - Truncates messages longer than 500 characters
pub(crate) fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = message.to_string();

    sanitized = SECRET_PARAM_PATTERN
        .replace_all(&sanitized, "${1}[REDACTED]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
