use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::jukebox::{JukeboxAction, JukeboxState};

const PLAYLIST_FIELD: &str = "jukeboxPlaylist";
const STATUS_FIELD: &str = "jukeboxStatus";

impl super::SubsonicApi {
    /// Control the server-side jukebox.
    ///
    /// `get` is answered with the playlist, every other action with the
    /// playback status.
    #[instrument(skip(self))]
    pub async fn jukebox_control(&self, action: JukeboxAction) -> Result<JukeboxState> {
        let mut envelope = self.envelope("jukeboxControl", action.into_params()).await?;

        if let Some(playlist) = envelope.remove(PLAYLIST_FIELD) {
            return Ok(JukeboxState::Playlist(serde_json::from_value(playlist)?));
        }
        if let Some(status) = envelope.remove(STATUS_FIELD) {
            return Ok(JukeboxState::Status(serde_json::from_value(status)?));
        }
        Err(Error::new(ErrorKind::MissingField(STATUS_FIELD.to_string())))
    }
}
