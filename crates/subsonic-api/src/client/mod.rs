//! Subsonic API client.
//!
//! This client wraps `SubsonicClient` from `opensubsonic-client` and
//! provides one typed method per protocol endpoint. Payloads are taken out
//! of the `subsonic-response` envelope and deserialized into the types of
//! this crate; media endpoints return the raw [`Response`].

use opensubsonic_client::{ClientConfig, Params, Response, SubsonicClient, SubsonicResponse};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};

mod annotation;
mod bookmarks;
mod browsing;
mod chat;
mod jukebox;
mod lists;
mod media;
mod playlists;
mod podcasts;
mod radio;
mod scan;
mod search;
mod sharing;
mod system;
mod users;

/// Subsonic / OpenSubsonic API client.
///
/// Provides typed methods for every endpoint group:
/// - System, browsing, album/song lists and searching
/// - Playlists, annotation, sharing, bookmarks and play queue
/// - Podcasts, jukebox, internet radio and chat
/// - User management and library scanning
/// - Media retrieval (stream, download, cover art, ...)
///
/// # Example
///
/// ```rust,ignore
/// use opensubsonic_api::{AlbumListArgs, AlbumListType, SubsonicApi};
/// use opensubsonic_client::ClientConfig;
///
/// let api = SubsonicApi::connect(
///     ClientConfig::builder()
///         .with_url("https://demo.navidrome.org")
///         .with_password("demo", "demo")
///         .build(),
/// )
/// .await?;
///
/// let newest = api.get_album_list2(AlbumListArgs::new(AlbumListType::Newest)).await?;
/// let album = api.get_album(&newest[0].id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SubsonicApi {
    client: SubsonicClient,
}

impl SubsonicApi {
    /// Create a new API client. No request is sent.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = SubsonicClient::new(config)?;
        Ok(Self { client })
    }

    /// Create a new API client and verify the credentials with `ping`.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let api = Self::new(config)?;
        api.ping().await?;
        Ok(api)
    }

    /// Create an API client from an existing SubsonicClient.
    pub fn from_client(client: SubsonicClient) -> Self {
        Self { client }
    }

    /// Get the underlying SubsonicClient.
    pub fn inner(&self) -> &SubsonicClient {
        &self.client
    }

    /// Call any method and return the raw response.
    #[instrument(skip(self, params))]
    pub async fn custom(&self, method: &str, params: Params) -> Result<Response> {
        self.client.request(method, params).await.map_err(Into::into)
    }

    /// Call any method and deserialize the whole envelope as `T`.
    #[instrument(skip(self, params))]
    pub async fn custom_json<T: DeserializeOwned>(&self, method: &str, params: Params) -> Result<T> {
        self.client
            .request_json(method, params)
            .await
            .map_err(Into::into)
    }

    /// Call a method whose answer carries no payload.
    pub(crate) async fn call(&self, method: &str, params: Params) -> Result<SubsonicResponse> {
        self.client
            .request_json(method, params)
            .await
            .map_err(Into::into)
    }

    /// Call a media method.
    pub(crate) async fn fetch_media(&self, method: &str, params: Params) -> Result<Response> {
        self.client.request(method, params).await.map_err(Into::into)
    }

    async fn envelope(&self, method: &str, params: Params) -> Result<Map<String, Value>> {
        self.client
            .request_json(method, params)
            .await
            .map_err(Into::into)
    }

    /// Call a method and deserialize the payload under `field`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        method: &str,
        field: &str,
        params: Params,
    ) -> Result<T> {
        self.fetch_optional(method, field, params)
            .await?
            .ok_or_else(|| Error::new(ErrorKind::MissingField(field.to_string())))
    }

    /// Like [`fetch`](Self::fetch), but an absent payload is `None`.
    pub(crate) async fn fetch_optional<T: DeserializeOwned>(
        &self,
        method: &str,
        field: &str,
        params: Params,
    ) -> Result<Option<T>> {
        let mut envelope = self.envelope(method, params).await?;
        match envelope.remove(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// Call a method whose payload is a wrapper object around one list,
    /// e.g. `{"musicFolders": {"musicFolder": [...]}}`.
    ///
    /// An empty wrapper yields an empty list.
    pub(crate) async fn fetch_list<T: DeserializeOwned>(
        &self,
        method: &str,
        field: &str,
        item: &str,
        params: Params,
    ) -> Result<Vec<T>> {
        let mut wrapper: Map<String, Value> = self.fetch(method, field, params).await?;
        match wrapper.remove(item) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }
}
