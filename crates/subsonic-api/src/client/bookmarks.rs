use opensubsonic_client::{Params, SubsonicResponse};
use tracing::instrument;

use crate::bookmarks::{Bookmark, PlayQueue};
use crate::error::Result;

impl super::SubsonicApi {
    /// Bookmarks of the current user.
    #[instrument(skip(self))]
    pub async fn get_bookmarks(&self) -> Result<Vec<Bookmark>> {
        self.fetch_list("getBookmarks", "bookmarks", "bookmark", Params::new())
            .await
    }

    /// Bookmark a position, in milliseconds, in a media file.
    #[instrument(skip(self))]
    pub async fn create_bookmark(
        &self,
        id: &str,
        position: u64,
        comment: Option<&str>,
    ) -> Result<SubsonicResponse> {
        let params = Params::new()
            .with("id", id)
            .with("position", position)
            .with("comment", comment);
        self.call("createBookmark", params).await
    }

    #[instrument(skip(self))]
    pub async fn delete_bookmark(&self, id: &str) -> Result<SubsonicResponse> {
        self.call("deleteBookmark", Params::new().with("id", id))
            .await
    }

    /// The saved play queue, if the user saved one.
    #[instrument(skip(self))]
    pub async fn get_play_queue(&self) -> Result<Option<PlayQueue>> {
        self.fetch_optional("getPlayQueue", "playQueue", Params::new())
            .await
    }

    /// Save the play queue. An empty `ids` clears it.
    #[instrument(skip(self))]
    pub async fn save_play_queue(
        &self,
        ids: &[&str],
        current: Option<&str>,
        position: Option<u64>,
    ) -> Result<SubsonicResponse> {
        let params = Params::new()
            .with("id", ids)
            .with("current", current)
            .with("position", position);
        self.call("savePlayQueue", params).await
    }
}
