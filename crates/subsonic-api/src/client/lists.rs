use opensubsonic_client::Params;
use tracing::instrument;

use crate::browsing::{AlbumId3, Child};
use crate::error::{Error, ErrorKind, Result};
use crate::lists::{AlbumListArgs, AlbumListType, NowPlayingEntry, RandomSongsArgs, Starred, Starred2};

impl super::SubsonicApi {
    /// List albums (file-based model).
    #[instrument(skip(self))]
    pub async fn get_album_list(&self, args: AlbumListArgs) -> Result<Vec<Child>> {
        check_album_list(&args)?;
        self.fetch_list("getAlbumList", "albumList", "album", args.into_params())
            .await
    }

    /// List albums (tag-based model).
    #[instrument(skip(self))]
    pub async fn get_album_list2(&self, args: AlbumListArgs) -> Result<Vec<AlbumId3>> {
        check_album_list(&args)?;
        self.fetch_list("getAlbumList2", "albumList2", "album", args.into_params())
            .await
    }

    /// Random songs matching the criteria.
    #[instrument(skip(self))]
    pub async fn get_random_songs(&self, args: RandomSongsArgs) -> Result<Vec<Child>> {
        self.fetch_list("getRandomSongs", "randomSongs", "song", args.into_params())
            .await
    }

    /// Songs of a genre.
    #[instrument(skip(self))]
    pub async fn get_songs_by_genre(
        &self,
        genre: &str,
        count: Option<u32>,
        offset: Option<u32>,
        music_folder_id: Option<&str>,
    ) -> Result<Vec<Child>> {
        let params = Params::new()
            .with("genre", genre)
            .with("count", count)
            .with("offset", offset)
            .with("musicFolderId", music_folder_id);
        self.fetch_list("getSongsByGenre", "songsByGenre", "song", params)
            .await
    }

    /// What all users are playing now.
    #[instrument(skip(self))]
    pub async fn get_now_playing(&self) -> Result<Vec<NowPlayingEntry>> {
        self.fetch_list("getNowPlaying", "nowPlaying", "entry", Params::new())
            .await
    }

    /// Starred songs, albums and artists (file-based model).
    #[instrument(skip(self))]
    pub async fn get_starred(&self, music_folder_id: Option<&str>) -> Result<Starred> {
        let params = Params::new().with("musicFolderId", music_folder_id);
        self.fetch("getStarred", "starred", params).await
    }

    /// Starred songs, albums and artists (tag-based model).
    #[instrument(skip(self))]
    pub async fn get_starred2(&self, music_folder_id: Option<&str>) -> Result<Starred2> {
        let params = Params::new().with("musicFolderId", music_folder_id);
        self.fetch("getStarred2", "starred2", params).await
    }
}

fn check_album_list(args: &AlbumListArgs) -> Result<()> {
    let missing = match args.list_type {
        AlbumListType::ByYear if args.from_year.is_none() || args.to_year.is_none() => {
            "byYear needs from_year and to_year"
        }
        AlbumListType::ByGenre if args.genre.is_none() => "byGenre needs genre",
        _ => return Ok(()),
    };
    Err(Error::new(ErrorKind::InvalidArgument(missing.to_string())))
}
