use opensubsonic_client::Params;
use tracing::instrument;

use crate::error::Result;
use crate::system::ScanStatus;

impl super::SubsonicApi {
    #[instrument(skip(self))]
    pub async fn get_scan_status(&self) -> Result<ScanStatus> {
        self.fetch("getScanStatus", "scanStatus", Params::new())
            .await
    }

    /// Start a library scan. `full_scan` is a Navidrome extension that
    /// rescans unchanged files too.
    #[instrument(skip(self))]
    pub async fn start_scan(&self, full_scan: Option<bool>) -> Result<ScanStatus> {
        let params = Params::new().with("fullScan", full_scan);
        self.fetch("startScan", "scanStatus", params).await
    }
}
