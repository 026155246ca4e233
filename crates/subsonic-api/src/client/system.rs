use opensubsonic_client::{Params, SubsonicResponse};
use tracing::instrument;

use crate::error::Result;
use crate::system::{License, OpenSubsonicExtension};

impl super::SubsonicApi {
    /// Test connectivity and credentials.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<SubsonicResponse> {
        self.call("ping", Params::new()).await
    }

    /// Get the server license.
    #[instrument(skip(self))]
    pub async fn get_license(&self) -> Result<License> {
        self.fetch("getLicense", "license", Params::new()).await
    }

    /// List the OpenSubsonic extensions the server supports.
    ///
    /// Plain Subsonic servers do not know this method and answer with a
    /// protocol error.
    #[instrument(skip(self))]
    pub async fn get_open_subsonic_extensions(&self) -> Result<Vec<OpenSubsonicExtension>> {
        let extensions = self
            .fetch_optional("getOpenSubsonicExtensions", "openSubsonicExtensions", Params::new())
            .await?;
        Ok(extensions.unwrap_or_default())
    }
}
