//! Search arguments and results.

use chrono::{DateTime, Utc};
use opensubsonic_client::Params;
use serde::{Deserialize, Serialize};

use crate::browsing::{AlbumId3, Artist, ArtistId3, Child};

/// Arguments of the legacy `search` method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacySearchArgs {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    /// Matched against all fields.
    pub any: Option<String>,
    pub count: Option<u32>,
    pub offset: Option<u32>,
    /// Only return matches newer than this.
    pub newer_than: Option<DateTime<Utc>>,
}

impl LegacySearchArgs {
    pub(crate) fn into_params(self) -> Params {
        Params::new()
            .with("artist", self.artist)
            .with("album", self.album)
            .with("title", self.title)
            .with("any", self.any)
            .with("count", self.count)
            .with("offset", self.offset)
            .with("newerThan", self.newer_than.map(|t| t.timestamp_millis()))
    }
}

/// Answer of the legacy `search` method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub total_hits: u32,
    #[serde(default, rename = "match")]
    pub matches: Vec<Child>,
}

/// Arguments of `search2` and `search3`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Search text. OpenSubsonic servers accept an empty query to list everything.
    pub query: String,
    pub artist_count: Option<u32>,
    pub artist_offset: Option<u32>,
    pub album_count: Option<u32>,
    pub album_offset: Option<u32>,
    pub song_count: Option<u32>,
    pub song_offset: Option<u32>,
    pub music_folder_id: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Only search songs, `count` at a time.
    pub fn songs_only(mut self, count: u32, offset: u32) -> Self {
        self.artist_count = Some(0);
        self.album_count = Some(0);
        self.song_count = Some(count);
        self.song_offset = Some(offset);
        self
    }

    pub(crate) fn into_params(self) -> Params {
        Params::new()
            .with("query", self.query)
            .with("artistCount", self.artist_count)
            .with("artistOffset", self.artist_offset)
            .with("albumCount", self.album_count)
            .with("albumOffset", self.album_offset)
            .with("songCount", self.song_count)
            .with("songOffset", self.song_offset)
            .with("musicFolderId", self.music_folder_id)
    }
}

/// Answer of `search2`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult2 {
    #[serde(default)]
    pub artist: Vec<Artist>,
    #[serde(default)]
    pub album: Vec<Child>,
    #[serde(default)]
    pub song: Vec<Child>,
}

/// Answer of `search3`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult3 {
    #[serde(default)]
    pub artist: Vec<ArtistId3>,
    #[serde(default)]
    pub album: Vec<AlbumId3>,
    #[serde(default)]
    pub song: Vec<Child>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_songs_only_query() {
        let pairs = SearchQuery::new("blue").songs_only(50, 100).into_params().to_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["query", "artistCount", "albumCount", "songCount", "songOffset"]);
        assert_eq!(pairs[1].1, "0");
        assert_eq!(pairs[4].1, "100");
    }

    #[test]
    fn test_legacy_newer_than_is_millis() {
        let args = LegacySearchArgs {
            any: Some("blue".to_string()),
            newer_than: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        let pairs = args.into_params().to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("any".to_string(), "blue".to_string()),
                ("newerThan".to_string(), "1704067200000".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_result_sections() {
        let result: SearchResult3 = serde_json::from_str("{}").unwrap();
        assert!(result.artist.is_empty() && result.album.is_empty() && result.song.is_empty());
    }
}
