use opensubsonic_client::{Params, Response, SubsonicResponse};
use tracing::instrument;

use crate::error::Result;
use crate::podcasts::{PodcastChannel, PodcastEpisode};

impl super::SubsonicApi {
    /// Subscribed podcast channels, optionally with their episodes.
    #[instrument(skip(self))]
    pub async fn get_podcasts(
        &self,
        id: Option<&str>,
        include_episodes: Option<bool>,
    ) -> Result<Vec<PodcastChannel>> {
        let params = Params::new()
            .with("id", id)
            .with("includeEpisodes", include_episodes);
        self.fetch_list("getPodcasts", "podcasts", "channel", params)
            .await
    }

    /// The most recently published episodes.
    #[instrument(skip(self))]
    pub async fn get_newest_podcasts(&self, count: Option<u32>) -> Result<Vec<PodcastEpisode>> {
        let params = Params::new().with("count", count);
        self.fetch_list("getNewestPodcasts", "newestPodcasts", "episode", params)
            .await
    }

    /// Ask the server to check all channels for new episodes.
    #[instrument(skip(self))]
    pub async fn refresh_podcasts(&self) -> Result<SubsonicResponse> {
        self.call("refreshPodcasts", Params::new()).await
    }

    #[instrument(skip(self))]
    pub async fn create_podcast_channel(&self, url: &str) -> Result<SubsonicResponse> {
        self.call("createPodcastChannel", Params::new().with("url", url))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_podcast_channel(&self, id: &str) -> Result<SubsonicResponse> {
        self.call("deletePodcastChannel", Params::new().with("id", id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_podcast_episode(&self, id: &str) -> Result<SubsonicResponse> {
        self.call("deletePodcastEpisode", Params::new().with("id", id))
            .await
    }

    /// Ask the server to download an episode.
    #[instrument(skip(self))]
    pub async fn download_podcast_episode(&self, id: &str) -> Result<Response> {
        self.fetch_media("downloadPodcastEpisode", Params::new().with("id", id))
            .await
    }
}
