use chrono::{DateTime, Utc};
use opensubsonic_client::{Params, SubsonicResponse};
use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::sharing::Share;

impl super::SubsonicApi {
    /// Shares created by the current user.
    #[instrument(skip(self))]
    pub async fn get_shares(&self) -> Result<Vec<Share>> {
        self.fetch_list("getShares", "shares", "share", Params::new())
            .await
    }

    /// Create a public link to songs, albums or playlists.
    #[instrument(skip(self))]
    pub async fn create_share(
        &self,
        ids: &[&str],
        description: Option<&str>,
        expires: Option<DateTime<Utc>>,
    ) -> Result<Share> {
        let params = Params::new()
            .with("id", ids)
            .with("description", description)
            .with("expires", expires.map(|t| t.timestamp_millis()));
        let shares: Vec<Share> = self
            .fetch_list("createShare", "shares", "share", params)
            .await?;
        shares
            .into_iter()
            .next()
            .ok_or_else(|| Error::new(ErrorKind::MissingField("share".to_string())))
    }

    /// Change the description or expiry of a share.
    #[instrument(skip(self))]
    pub async fn update_share(
        &self,
        id: &str,
        description: Option<&str>,
        expires: Option<DateTime<Utc>>,
    ) -> Result<SubsonicResponse> {
        let params = Params::new()
            .with("id", id)
            .with("description", description)
            .with("expires", expires.map(|t| t.timestamp_millis()));
        self.call("updateShare", params).await
    }

    #[instrument(skip(self))]
    pub async fn delete_share(&self, id: &str) -> Result<SubsonicResponse> {
        self.call("deleteShare", Params::new().with("id", id))
            .await
    }
}
