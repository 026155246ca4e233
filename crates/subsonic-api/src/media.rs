//! Media retrieval arguments and lyrics.

use opensubsonic_client::Params;
use serde::{Deserialize, Serialize};

/// Arguments of `stream`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamArgs {
    pub id: String,
    /// Upper bound in kbps; 0 means no limit.
    pub max_bit_rate: Option<u32>,
    /// Target format, e.g. `mp3`, `opus`, or `raw` to disable transcoding.
    pub format: Option<String>,
    /// Start offset in seconds (video, or servers that support it).
    pub time_offset: Option<u32>,
    /// Video size as `WIDTHxHEIGHT`.
    pub size: Option<String>,
    pub estimate_content_length: Option<bool>,
    /// Stream the converted video version.
    pub converted: Option<bool>,
}

impl StreamArgs {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn transcode(mut self, format: impl Into<String>, max_bit_rate: u32) -> Self {
        self.format = Some(format.into());
        self.max_bit_rate = Some(max_bit_rate);
        self
    }

    pub(crate) fn into_params(self) -> Params {
        Params::new()
            .with("id", self.id)
            .with("maxBitRate", self.max_bit_rate)
            .with("format", self.format)
            .with("timeOffset", self.time_offset)
            .with("size", self.size)
            .with("estimateContentLength", self.estimate_content_length)
            .with("converted", self.converted)
    }
}

/// Answer of the classic `getLyrics` method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lyrics {
    pub artist: Option<String>,
    pub title: Option<String>,
    /// The lyrics text.
    #[serde(default)]
    pub value: String,
}

/// One line of structured lyrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    /// Start time in milliseconds; absent for unsynced lyrics.
    pub start: Option<u64>,
    #[serde(default)]
    pub value: String,
}

/// Lyrics for one language (OpenSubsonic `songLyrics`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredLyrics {
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub synced: bool,
    #[serde(default)]
    pub line: Vec<LyricLine>,
    pub display_artist: Option<String>,
    pub display_title: Option<String>,
    /// Milliseconds to add to every line start.
    pub offset: Option<i64>,
}
