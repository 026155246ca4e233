use opensubsonic_client::Params;
use tracing::instrument;

use crate::browsing::{
    AlbumInfo, AlbumWithSongsId3, ArtistInfo, ArtistInfo2, ArtistWithAlbumsId3, ArtistsId3,
    Child, Directory, Genre, Indexes, MusicFolder, VideoInfo,
};
use crate::error::Result;

impl super::SubsonicApi {
    /// List the configured top-level music folders.
    #[instrument(skip(self))]
    pub async fn get_music_folders(&self) -> Result<Vec<MusicFolder>> {
        self.fetch_list("getMusicFolders", "musicFolders", "musicFolder", Params::new())
            .await
    }

    /// Get the file-based artist index.
    ///
    /// `if_modified_since` is in milliseconds since the epoch; the server
    /// answers with an empty index if nothing changed.
    #[instrument(skip(self))]
    pub async fn get_indexes(
        &self,
        music_folder_id: Option<&str>,
        if_modified_since: Option<i64>,
    ) -> Result<Indexes> {
        let params = Params::new()
            .with("musicFolderId", music_folder_id)
            .with("ifModifiedSince", if_modified_since);
        self.fetch("getIndexes", "indexes", params).await
    }

    /// List the files in a music directory.
    #[instrument(skip(self))]
    pub async fn get_music_directory(&self, id: &str) -> Result<Directory> {
        self.fetch("getMusicDirectory", "directory", Params::new().with("id", id))
            .await
    }

    /// List all genres.
    #[instrument(skip(self))]
    pub async fn get_genres(&self) -> Result<Vec<Genre>> {
        self.fetch_list("getGenres", "genres", "genre", Params::new())
            .await
    }

    /// Get the tag-based artist index.
    #[instrument(skip(self))]
    pub async fn get_artists(&self, music_folder_id: Option<&str>) -> Result<ArtistsId3> {
        let params = Params::new().with("musicFolderId", music_folder_id);
        self.fetch("getArtists", "artists", params).await
    }

    /// Get an artist with its albums.
    #[instrument(skip(self))]
    pub async fn get_artist(&self, id: &str) -> Result<ArtistWithAlbumsId3> {
        self.fetch("getArtist", "artist", Params::new().with("id", id))
            .await
    }

    /// Get an album with its songs.
    #[instrument(skip(self))]
    pub async fn get_album(&self, id: &str) -> Result<AlbumWithSongsId3> {
        self.fetch("getAlbum", "album", Params::new().with("id", id))
            .await
    }

    /// Get a single song.
    #[instrument(skip(self))]
    pub async fn get_song(&self, id: &str) -> Result<Child> {
        self.fetch("getSong", "song", Params::new().with("id", id))
            .await
    }

    /// List all videos.
    #[instrument(skip(self))]
    pub async fn get_videos(&self) -> Result<Vec<Child>> {
        self.fetch_list("getVideos", "videos", "video", Params::new())
            .await
    }

    /// Get captions, audio tracks and conversions of a video.
    #[instrument(skip(self))]
    pub async fn get_video_info(&self, id: &str) -> Result<VideoInfo> {
        self.fetch("getVideoInfo", "videoInfo", Params::new().with("id", id))
            .await
    }

    /// Get biography and similar artists (file-based model).
    #[instrument(skip(self))]
    pub async fn get_artist_info(
        &self,
        id: &str,
        count: Option<u32>,
        include_not_present: Option<bool>,
    ) -> Result<ArtistInfo> {
        let params = Params::new()
            .with("id", id)
            .with("count", count)
            .with("includeNotPresent", include_not_present);
        self.fetch("getArtistInfo", "artistInfo", params).await
    }

    /// Get biography and similar artists (tag-based model).
    #[instrument(skip(self))]
    pub async fn get_artist_info2(
        &self,
        id: &str,
        count: Option<u32>,
        include_not_present: Option<bool>,
    ) -> Result<ArtistInfo2> {
        let params = Params::new()
            .with("id", id)
            .with("count", count)
            .with("includeNotPresent", include_not_present);
        self.fetch("getArtistInfo2", "artistInfo2", params).await
    }

    /// Get album notes and images (file-based model).
    #[instrument(skip(self))]
    pub async fn get_album_info(&self, id: &str) -> Result<AlbumInfo> {
        self.fetch("getAlbumInfo", "albumInfo", Params::new().with("id", id))
            .await
    }

    /// Get album notes and images (tag-based model).
    #[instrument(skip(self))]
    pub async fn get_album_info2(&self, id: &str) -> Result<AlbumInfo> {
        self.fetch("getAlbumInfo2", "albumInfo", Params::new().with("id", id))
            .await
    }

    /// Songs similar to an artist, album or song (file-based model).
    #[instrument(skip(self))]
    pub async fn get_similar_songs(&self, id: &str, count: Option<u32>) -> Result<Vec<Child>> {
        let params = Params::new().with("id", id).with("count", count);
        self.fetch_list("getSimilarSongs", "similarSongs", "song", params)
            .await
    }

    /// Songs similar to an artist (tag-based model).
    #[instrument(skip(self))]
    pub async fn get_similar_songs2(&self, id: &str, count: Option<u32>) -> Result<Vec<Child>> {
        let params = Params::new().with("id", id).with("count", count);
        self.fetch_list("getSimilarSongs2", "similarSongs2", "song", params)
            .await
    }

    /// Top songs of an artist, by artist name.
    #[instrument(skip(self))]
    pub async fn get_top_songs(&self, artist: &str, count: Option<u32>) -> Result<Vec<Child>> {
        let params = Params::new().with("artist", artist).with("count", count);
        self.fetch_list("getTopSongs", "topSongs", "song", params)
            .await
    }
}
