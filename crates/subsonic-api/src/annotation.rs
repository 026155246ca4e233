//! Star targets for `star` / `unstar`.

use opensubsonic_client::Params;

/// Items to star or unstar. Any combination may be given in one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarTarget {
    /// Songs, or folders in the file-based model.
    pub ids: Vec<String>,
    pub album_ids: Vec<String>,
    pub artist_ids: Vec<String>,
}

impl StarTarget {
    pub fn song(id: impl Into<String>) -> Self {
        Self {
            ids: vec![id.into()],
            ..Self::default()
        }
    }

    pub fn album(id: impl Into<String>) -> Self {
        Self {
            album_ids: vec![id.into()],
            ..Self::default()
        }
    }

    pub fn artist(id: impl Into<String>) -> Self {
        Self {
            artist_ids: vec![id.into()],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.album_ids.is_empty() && self.artist_ids.is_empty()
    }

    pub(crate) fn into_params(self) -> Params {
        Params::new()
            .with("id", self.ids)
            .with("albumId", self.album_ids)
            .with("artistId", self.artist_ids)
    }
}
