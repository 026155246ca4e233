//! # opensubsonic-api
//!
//! Typed Subsonic / OpenSubsonic endpoint methods on top of `opensubsonic-client`.
//!
//! ## Features
//!
//! - **Browsing** - Music folders, indexes, artists, albums, songs and videos
//! - **Lists** - Album lists, random songs, now playing, starred items
//! - **Search** - Legacy `search`, `search2` and `search3`
//! - **Playlists** - List, create, update and delete playlists
//! - **Annotation** - Star, rate and scrobble
//! - **Media** - Stream, download, HLS, cover art, avatars and lyrics
//! - **Sharing, Podcasts, Jukebox, Radio, Chat** - The remaining endpoint groups
//! - **Users, Bookmarks, Scanning** - Account management and library scans
//!
//! Both catalog models are covered: the file-based one (`getIndexes`,
//! `getMusicDirectory`, [`Child`] albums) and the tag-based one
//! (`getArtists`, `getAlbum`, types with an `Id3` suffix).
//!
//! ## Example
//!
//! ```rust,ignore
//! use opensubsonic_api::{SearchQuery, SubsonicApi};
//! use opensubsonic_client::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), opensubsonic_api::Error> {
//!     let api = SubsonicApi::new(
//!         ClientConfig::builder()
//!             .with_url("https://music.example.com")
//!             .with_api_key("my-api-key")
//!             .build(),
//!     )?;
//!
//!     let hits = api.search3(SearchQuery::new("love")).await?;
//!     for song in &hits.song {
//!         println!("{} - {}", song.artist.as_deref().unwrap_or("?"), song.title);
//!     }
//!
//!     // Media endpoints return the raw response
//!     let art = api.get_cover_art(&hits.song[0].id, Some(300)).await?;
//!     println!("{} bytes of {:?}", art.body().len(), art.content_type());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub mod annotation;
pub mod bookmarks;
pub mod browsing;
pub mod chat;
pub mod jukebox;
pub mod lists;
pub mod media;
pub mod playlists;
pub mod podcasts;
pub mod radio;
pub mod search;
pub mod sharing;
pub mod system;
pub mod users;

// Main client
pub use client::SubsonicApi;

// Error types
pub use error::{Error, ErrorKind, Result};

// Catalog types
pub use browsing::{
    AlbumId3, AlbumInfo, AlbumWithSongsId3, Artist, ArtistId3, ArtistInfo, ArtistInfo2,
    ArtistWithAlbumsId3, ArtistsId3, Child, Directory, Genre, Indexes, MediaType, MusicFolder,
    VideoInfo,
};

// Request arguments
pub use annotation::StarTarget;
pub use jukebox::JukeboxAction;
pub use lists::{AlbumListArgs, AlbumListType, RandomSongsArgs};
pub use media::StreamArgs;
pub use playlists::UpdatePlaylistArgs;
pub use search::{LegacySearchArgs, SearchQuery};
pub use users::UserArgs;

// Answers
pub use bookmarks::{Bookmark, PlayQueue};
pub use chat::ChatMessage;
pub use jukebox::{JukeboxPlaylist, JukeboxState, JukeboxStatus};
pub use lists::{NowPlayingEntry, Starred, Starred2};
pub use media::{LyricLine, Lyrics, StructuredLyrics};
pub use playlists::{Playlist, PlaylistWithSongs};
pub use podcasts::{PodcastChannel, PodcastEpisode, PodcastStatus};
pub use radio::InternetRadioStation;
pub use search::{SearchResult, SearchResult2, SearchResult3};
pub use sharing::Share;
pub use system::{License, OpenSubsonicExtension, ScanStatus};
pub use users::User;

// Re-export client types that users might need
pub use opensubsonic_client::{ClientConfig, ClientConfigBuilder, Params, Response, SubsonicResponse};
