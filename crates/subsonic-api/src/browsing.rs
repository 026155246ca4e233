//! Catalog types returned by the browsing endpoints.
//!
//! Field names follow the JSON wire format (camelCase). Timestamps are
//! ISO 8601 on the wire and parsed as UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media a [`Child`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Music,
    Podcast,
    Audiobook,
    Video,
    #[serde(other)]
    Unknown,
}

/// A top-level music folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicFolder {
    pub id: i64,
    pub name: Option<String>,
}

/// A genre with its usage counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    /// Genre name.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub song_count: u32,
    #[serde(default)]
    pub album_count: u32,
}

/// A song, video, podcast episode or directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    pub parent: Option<String>,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default)]
    pub title: String,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub track: Option<u32>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub cover_art: Option<String>,
    pub size: Option<u64>,
    pub content_type: Option<String>,
    pub suffix: Option<String>,
    pub transcoded_content_type: Option<String>,
    pub transcoded_suffix: Option<String>,
    /// Duration in seconds.
    pub duration: Option<u32>,
    pub bit_rate: Option<u32>,
    pub path: Option<String>,
    pub is_video: Option<bool>,
    pub user_rating: Option<u8>,
    pub average_rating: Option<f64>,
    pub play_count: Option<u64>,
    pub disc_number: Option<u32>,
    pub created: Option<DateTime<Utc>>,
    pub starred: Option<DateTime<Utc>>,
    pub album_id: Option<String>,
    pub artist_id: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    /// Position in milliseconds, when bookmarked.
    pub bookmark_position: Option<u64>,
    pub original_width: Option<u32>,
    pub original_height: Option<u32>,
    /// OpenSubsonic: last time the entry was played.
    pub played: Option<DateTime<Utc>>,
    /// OpenSubsonic: beats per minute.
    pub bpm: Option<u32>,
    /// OpenSubsonic: comment tag.
    pub comment: Option<String>,
    /// OpenSubsonic: sort name.
    pub sort_name: Option<String>,
    /// OpenSubsonic: MusicBrainz recording id.
    pub music_brainz_id: Option<String>,
}

/// A folder in the file-based browsing model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    pub id: String,
    pub parent: Option<String>,
    pub name: String,
    pub starred: Option<DateTime<Utc>>,
    pub user_rating: Option<u8>,
    pub average_rating: Option<f64>,
    pub play_count: Option<u64>,
    #[serde(default)]
    pub child: Vec<Child>,
}

/// An artist in the file-based browsing model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub artist_image_url: Option<String>,
    pub starred: Option<DateTime<Utc>>,
    pub user_rating: Option<u8>,
    pub average_rating: Option<f64>,
}

/// One letter of the file-based artist index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub name: String,
    #[serde(default)]
    pub artist: Vec<Artist>,
}

/// Answer of `getIndexes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indexes {
    #[serde(default)]
    pub ignored_articles: String,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub last_modified: i64,
    #[serde(default)]
    pub shortcut: Vec<Artist>,
    #[serde(default)]
    pub index: Vec<Index>,
    #[serde(default)]
    pub child: Vec<Child>,
}

/// An artist in the tag-based (ID3) model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistId3 {
    pub id: String,
    pub name: String,
    pub cover_art: Option<String>,
    pub artist_image_url: Option<String>,
    #[serde(default)]
    pub album_count: u32,
    pub starred: Option<DateTime<Utc>>,
    /// OpenSubsonic: MusicBrainz artist id.
    pub music_brainz_id: Option<String>,
    /// OpenSubsonic: sort name.
    pub sort_name: Option<String>,
}

/// One letter of the tag-based artist index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexId3 {
    pub name: String,
    #[serde(default)]
    pub artist: Vec<ArtistId3>,
}

/// Answer of `getArtists`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistsId3 {
    #[serde(default)]
    pub ignored_articles: String,
    #[serde(default)]
    pub index: Vec<IndexId3>,
}

impl ArtistsId3 {
    /// All artists across all index letters.
    pub fn artists(&self) -> impl Iterator<Item = &ArtistId3> {
        self.index.iter().flat_map(|i| i.artist.iter())
    }
}

/// An artist together with its albums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistWithAlbumsId3 {
    #[serde(flatten)]
    pub artist: ArtistId3,
    #[serde(default)]
    pub album: Vec<AlbumId3>,
}

/// An album in the tag-based (ID3) model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumId3 {
    pub id: String,
    pub name: String,
    pub artist: Option<String>,
    pub artist_id: Option<String>,
    pub cover_art: Option<String>,
    #[serde(default)]
    pub song_count: u32,
    /// Total duration in seconds.
    #[serde(default)]
    pub duration: u32,
    pub play_count: Option<u64>,
    pub created: Option<DateTime<Utc>>,
    pub starred: Option<DateTime<Utc>>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    /// OpenSubsonic: last time the album was played.
    pub played: Option<DateTime<Utc>>,
    /// OpenSubsonic: rating by the current user.
    pub user_rating: Option<u8>,
    /// OpenSubsonic: MusicBrainz release id.
    pub music_brainz_id: Option<String>,
    /// OpenSubsonic: sort name.
    pub sort_name: Option<String>,
}

/// An album together with its songs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumWithSongsId3 {
    #[serde(flatten)]
    pub album: AlbumId3,
    #[serde(default)]
    pub song: Vec<Child>,
}

/// Biography and images shared by both artist info variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInfoBase {
    pub biography: Option<String>,
    pub music_brainz_id: Option<String>,
    pub last_fm_url: Option<String>,
    pub small_image_url: Option<String>,
    pub medium_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

/// Answer of `getArtistInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInfo {
    #[serde(flatten)]
    pub info: ArtistInfoBase,
    #[serde(default)]
    pub similar_artist: Vec<Artist>,
}

/// Answer of `getArtistInfo2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInfo2 {
    #[serde(flatten)]
    pub info: ArtistInfoBase,
    #[serde(default)]
    pub similar_artist: Vec<ArtistId3>,
}

/// Answer of `getAlbumInfo` and `getAlbumInfo2`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInfo {
    pub notes: Option<String>,
    pub music_brainz_id: Option<String>,
    pub last_fm_url: Option<String>,
    pub small_image_url: Option<String>,
    pub medium_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

/// Answer of `getVideoInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub id: String,
    #[serde(default)]
    pub captions: Vec<Captions>,
    #[serde(default)]
    pub audio_track: Vec<AudioTrack>,
    #[serde(default)]
    pub conversion: Vec<VideoConversion>,
}

/// Subtitles available for a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    pub id: String,
    pub name: Option<String>,
}

/// An audio track of a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrack {
    pub id: String,
    pub name: Option<String>,
    pub language_code: Option<String>,
}

/// A converted version of a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConversion {
    pub id: String,
    pub bit_rate: Option<u32>,
    pub audio_track_id: Option<i64>,
}
