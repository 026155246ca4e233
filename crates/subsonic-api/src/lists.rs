//! Album and song lists.

use opensubsonic_client::Params;
use serde::{Deserialize, Serialize};

use crate::browsing::{AlbumId3, Artist, ArtistId3, Child};

/// Ordering for `getAlbumList` / `getAlbumList2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlbumListType {
    Random,
    Newest,
    Highest,
    Frequent,
    Recent,
    AlphabeticalByName,
    AlphabeticalByArtist,
    Starred,
    /// Requires `from_year` and `to_year`.
    ByYear,
    /// Requires `genre`.
    ByGenre,
}

impl AlbumListType {
    /// Wire value of the `type` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumListType::Random => "random",
            AlbumListType::Newest => "newest",
            AlbumListType::Highest => "highest",
            AlbumListType::Frequent => "frequent",
            AlbumListType::Recent => "recent",
            AlbumListType::AlphabeticalByName => "alphabeticalByName",
            AlbumListType::AlphabeticalByArtist => "alphabeticalByArtist",
            AlbumListType::Starred => "starred",
            AlbumListType::ByYear => "byYear",
            AlbumListType::ByGenre => "byGenre",
        }
    }
}

/// Arguments of `getAlbumList` / `getAlbumList2`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumListArgs {
    pub list_type: AlbumListType,
    /// Number of albums, 1 to 500 (server default 10).
    pub size: Option<u32>,
    pub offset: Option<u32>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
    pub genre: Option<String>,
    pub music_folder_id: Option<String>,
}

impl AlbumListArgs {
    pub fn new(list_type: AlbumListType) -> Self {
        Self {
            list_type,
            size: None,
            offset: None,
            from_year: None,
            to_year: None,
            genre: None,
            music_folder_id: None,
        }
    }

    /// Albums released between two years. Reversed years list newest first.
    pub fn by_year(from_year: i32, to_year: i32) -> Self {
        Self {
            from_year: Some(from_year),
            to_year: Some(to_year),
            ..Self::new(AlbumListType::ByYear)
        }
    }

    /// Albums of one genre.
    pub fn by_genre(genre: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
            ..Self::new(AlbumListType::ByGenre)
        }
    }

    pub fn with_page(mut self, size: u32, offset: u32) -> Self {
        self.size = Some(size);
        self.offset = Some(offset);
        self
    }

    pub fn with_music_folder(mut self, id: impl Into<String>) -> Self {
        self.music_folder_id = Some(id.into());
        self
    }

    pub(crate) fn into_params(self) -> Params {
        Params::new()
            .with("type", self.list_type.as_str())
            .with("size", self.size)
            .with("offset", self.offset)
            .with("fromYear", self.from_year)
            .with("toYear", self.to_year)
            .with("genre", self.genre)
            .with("musicFolderId", self.music_folder_id)
    }
}

/// Arguments of `getRandomSongs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomSongsArgs {
    pub size: Option<u32>,
    pub genre: Option<String>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
    pub music_folder_id: Option<String>,
}

impl RandomSongsArgs {
    pub(crate) fn into_params(self) -> Params {
        Params::new()
            .with("size", self.size)
            .with("genre", self.genre)
            .with("fromYear", self.from_year)
            .with("toYear", self.to_year)
            .with("musicFolderId", self.music_folder_id)
    }
}

/// A song someone is currently playing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlayingEntry {
    #[serde(flatten)]
    pub entry: Child,
    pub username: String,
    #[serde(default)]
    pub minutes_ago: u32,
    #[serde(default)]
    pub player_id: i64,
    pub player_name: Option<String>,
}

/// Starred items, file-based model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Starred {
    #[serde(default)]
    pub artist: Vec<Artist>,
    #[serde(default)]
    pub album: Vec<Child>,
    #[serde(default)]
    pub song: Vec<Child>,
}

/// Starred items, tag-based model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Starred2 {
    #[serde(default)]
    pub artist: Vec<ArtistId3>,
    #[serde(default)]
    pub album: Vec<AlbumId3>,
    #[serde(default)]
    pub song: Vec<Child>,
}
