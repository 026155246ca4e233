//! Server metadata: license, extensions and scan state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Answer of `getLicense`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub valid: bool,
    pub email: Option<String>,
    pub license_expires: Option<DateTime<Utc>>,
    pub trial_expires: Option<DateTime<Utc>>,
}

/// An OpenSubsonic extension and the versions the server implements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSubsonicExtension {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<u32>,
}

/// Well-known extension names.
pub mod extensions {
    /// Requests may be sent as form POST.
    pub const FORM_POST: &str = "formPost";
    /// `apiKey` authentication.
    pub const API_KEY_AUTHENTICATION: &str = "apiKeyAuthentication";
    /// `getLyricsBySongId`.
    pub const SONG_LYRICS: &str = "songLyrics";
    /// Stream offsets for audio.
    pub const TRANSCODE_OFFSET: &str = "transcodeOffset";
}

/// Returns true if `name` is in the list with any version.
pub fn supports_extension(extensions: &[OpenSubsonicExtension], name: &str) -> bool {
    extensions.iter().any(|e| e.name == name)
}

/// Answer of `getScanStatus` and `startScan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStatus {
    pub scanning: bool,
    /// Files scanned so far.
    pub count: Option<u64>,
    /// Navidrome: number of folders.
    pub folder_count: Option<u64>,
    /// Navidrome: end of the last scan.
    pub last_scan: Option<DateTime<Utc>>,
}
