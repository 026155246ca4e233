use chrono::{DateTime, Utc};
use opensubsonic_client::{Params, SubsonicResponse};
use tracing::instrument;

use crate::annotation::StarTarget;
use crate::error::{Error, ErrorKind, Result};

impl super::SubsonicApi {
    /// Star songs, albums or artists.
    #[instrument(skip(self))]
    pub async fn star(&self, target: StarTarget) -> Result<SubsonicResponse> {
        check_target(&target)?;
        self.call("star", target.into_params()).await
    }

    /// Remove the star from songs, albums or artists.
    #[instrument(skip(self))]
    pub async fn unstar(&self, target: StarTarget) -> Result<SubsonicResponse> {
        check_target(&target)?;
        self.call("unstar", target.into_params()).await
    }

    /// Rate an item from 1 to 5 stars. A rating of 0 removes the rating.
    #[instrument(skip(self))]
    pub async fn set_rating(&self, id: &str, rating: u8) -> Result<SubsonicResponse> {
        if rating > 5 {
            return Err(Error::new(ErrorKind::InvalidArgument(format!(
                "rating must be between 0 and 5, got {}",
                rating
            ))));
        }
        let params = Params::new().with("id", id).with("rating", rating);
        self.call("setRating", params).await
    }

    /// Register a play (`submission = true`) or a now-playing notification.
    #[instrument(skip(self))]
    pub async fn scrobble(
        &self,
        id: &str,
        submission: bool,
        time: Option<DateTime<Utc>>,
    ) -> Result<SubsonicResponse> {
        let params = Params::new()
            .with("id", id)
            .with("time", time.map(|t| t.timestamp_millis()))
            .with("submission", submission);
        self.call("scrobble", params).await
    }
}

fn check_target(target: &StarTarget) -> Result<()> {
    if target.is_empty() {
        return Err(Error::new(ErrorKind::InvalidArgument(
            "no id, albumId or artistId given".to_string(),
        )));
    }
    Ok(())
}
