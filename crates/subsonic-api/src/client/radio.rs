use opensubsonic_client::{Params, SubsonicResponse};
use tracing::instrument;

use crate::error::Result;
use crate::radio::InternetRadioStation;

impl super::SubsonicApi {
    #[instrument(skip(self))]
    pub async fn get_internet_radio_stations(&self) -> Result<Vec<InternetRadioStation>> {
        self.fetch_list(
            "getInternetRadioStations",
            "internetRadioStations",
            "internetRadioStation",
            Params::new(),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn create_internet_radio_station(
        &self,
        stream_url: &str,
        name: &str,
        homepage_url: Option<&str>,
    ) -> Result<SubsonicResponse> {
        let params = Params::new()
            .with("streamUrl", stream_url)
            .with("name", name)
            .with("homepageUrl", homepage_url);
        self.call("createInternetRadioStation", params).await
    }

    #[instrument(skip(self))]
    pub async fn update_internet_radio_station(
        &self,
        id: &str,
        stream_url: &str,
        name: &str,
        homepage_url: Option<&str>,
    ) -> Result<SubsonicResponse> {
        let params = Params::new()
            .with("id", id)
            .with("streamUrl", stream_url)
            .with("name", name)
            .with("homepageUrl", homepage_url);
        self.call("updateInternetRadioStation", params).await
    }

    #[instrument(skip(self))]
    pub async fn delete_internet_radio_station(&self, id: &str) -> Result<SubsonicResponse> {
        self.call("deleteInternetRadioStation", Params::new().with("id", id))
            .await
    }
}
