use opensubsonic_client::{Params, SubsonicResponse};
use tracing::instrument;

use crate::error::Result;
use crate::playlists::{Playlist, PlaylistWithSongs, UpdatePlaylistArgs};

impl super::SubsonicApi {
    /// Playlists visible to the current user, or owned by `username`
    /// (admins only).
    #[instrument(skip(self))]
    pub async fn get_playlists(&self, username: Option<&str>) -> Result<Vec<Playlist>> {
        let params = Params::new().with("username", username);
        self.fetch_list("getPlaylists", "playlists", "playlist", params)
            .await
    }

    /// Get a playlist with its entries.
    #[instrument(skip(self))]
    pub async fn get_playlist(&self, id: &str) -> Result<PlaylistWithSongs> {
        self.fetch("getPlaylist", "playlist", Params::new().with("id", id))
            .await
    }

    /// Create a playlist.
    ///
    /// Servers before protocol 1.14.0 answer without the created playlist,
    /// which yields `None`.
    #[instrument(skip(self))]
    pub async fn create_playlist(
        &self,
        name: &str,
        song_ids: &[&str],
    ) -> Result<Option<PlaylistWithSongs>> {
        let params = Params::new().with("name", name).with("songId", song_ids);
        self.fetch_optional("createPlaylist", "playlist", params)
            .await
    }

    /// Replace all entries of an existing playlist.
    #[instrument(skip(self))]
    pub async fn set_playlist_songs(
        &self,
        playlist_id: &str,
        song_ids: &[&str],
    ) -> Result<Option<PlaylistWithSongs>> {
        let params = Params::new()
            .with("playlistId", playlist_id)
            .with("songId", song_ids);
        self.fetch_optional("createPlaylist", "playlist", params)
            .await
    }

    /// Rename a playlist or change its entries.
    #[instrument(skip(self))]
    pub async fn update_playlist(&self, args: UpdatePlaylistArgs) -> Result<SubsonicResponse> {
        self.call("updatePlaylist", args.into_params()).await
    }

    #[instrument(skip(self))]
    pub async fn delete_playlist(&self, id: &str) -> Result<SubsonicResponse> {
        self.call("deletePlaylist", Params::new().with("id", id))
            .await
    }
}
