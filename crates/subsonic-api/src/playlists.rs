//! Playlists.

use chrono::{DateTime, Utc};
use opensubsonic_client::Params;
use serde::{Deserialize, Serialize};

use crate::browsing::Child;

/// Playlist summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub comment: Option<String>,
    pub owner: Option<String>,
    pub public: Option<bool>,
    #[serde(default)]
    pub song_count: u32,
    /// Total duration in seconds.
    #[serde(default)]
    pub duration: u32,
    pub created: DateTime<Utc>,
    pub changed: DateTime<Utc>,
    pub cover_art: Option<String>,
    #[serde(default)]
    pub allowed_user: Vec<String>,
}

/// Playlist with its entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistWithSongs {
    #[serde(flatten)]
    pub playlist: Playlist,
    #[serde(default)]
    pub entry: Vec<Child>,
}

/// Arguments of `updatePlaylist`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePlaylistArgs {
    pub playlist_id: String,
    pub name: Option<String>,
    pub comment: Option<String>,
    pub public: Option<bool>,
    pub song_id_to_add: Vec<String>,
    /// Zero-based positions, relative to the playlist before the update.
    pub song_index_to_remove: Vec<u32>,
}

impl UpdatePlaylistArgs {
    pub fn new(playlist_id: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            ..Self::default()
        }
    }

    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn add_songs<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.song_id_to_add.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn remove_indexes(mut self, indexes: impl IntoIterator<Item = u32>) -> Self {
        self.song_index_to_remove.extend(indexes);
        self
    }

    pub(crate) fn into_params(self) -> Params {
        Params::new()
            .with("playlistId", self.playlist_id)
            .with("name", self.name)
            .with("comment", self.comment)
            .with("public", self.public)
            .with("songIdToAdd", self.song_id_to_add)
            .with("songIndexToRemove", self.song_index_to_remove)
    }
}
