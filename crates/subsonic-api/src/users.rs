//! Users and their roles.

use chrono::{DateTime, Utc};
use opensubsonic_client::Params;
use serde::{Deserialize, Serialize};

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    #[serde(default)]
    pub scrobbling_enabled: bool,
    pub max_bit_rate: Option<u32>,
    #[serde(default)]
    pub admin_role: bool,
    #[serde(default)]
    pub settings_role: bool,
    #[serde(default)]
    pub download_role: bool,
    #[serde(default)]
    pub upload_role: bool,
    #[serde(default)]
    pub playlist_role: bool,
    #[serde(default)]
    pub cover_art_role: bool,
    #[serde(default)]
    pub comment_role: bool,
    #[serde(default)]
    pub podcast_role: bool,
    #[serde(default)]
    pub stream_role: bool,
    #[serde(default)]
    pub jukebox_role: bool,
    #[serde(default)]
    pub share_role: bool,
    #[serde(default)]
    pub video_conversion_role: bool,
    pub avatar_last_changed: Option<DateTime<Utc>>,
    /// Music folder ids the user may access.
    #[serde(default)]
    pub folder: Vec<i64>,
}

/// Fields of `createUser` and `updateUser`. Unset fields are not sent.
#[derive(Clone, Default, PartialEq)]
pub struct UserArgs {
    pub username: String,
    /// Required for `createUser`, optional for `updateUser`.
    pub password: Option<String>,
    pub email: Option<String>,
    pub ldap_authenticated: Option<bool>,
    pub admin_role: Option<bool>,
    pub settings_role: Option<bool>,
    pub stream_role: Option<bool>,
    pub jukebox_role: Option<bool>,
    pub download_role: Option<bool>,
    pub upload_role: Option<bool>,
    pub playlist_role: Option<bool>,
    pub cover_art_role: Option<bool>,
    pub comment_role: Option<bool>,
    pub podcast_role: Option<bool>,
    pub share_role: Option<bool>,
    pub video_conversion_role: Option<bool>,
    pub music_folder_id: Vec<String>,
    /// 0 means no limit. Only used by `updateUser`.
    pub max_bit_rate: Option<u32>,
}

impl std::fmt::Debug for UserArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserArgs")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("email", &self.email)
            .field("admin_role", &self.admin_role)
            .finish_non_exhaustive()
    }
}

impl UserArgs {
    /// Arguments for a new account.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Arguments that change an existing account.
    pub fn update(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub(crate) fn into_params(self) -> Params {
        Params::new()
            .with("username", self.username)
            .with("password", self.password)
            .with("email", self.email)
            .with("ldapAuthenticated", self.ldap_authenticated)
            .with("adminRole", self.admin_role)
            .with("settingsRole", self.settings_role)
            .with("streamRole", self.stream_role)
            .with("jukeboxRole", self.jukebox_role)
            .with("downloadRole", self.download_role)
            .with("uploadRole", self.upload_role)
            .with("playlistRole", self.playlist_role)
            .with("coverArtRole", self.cover_art_role)
            .with("commentRole", self.comment_role)
            .with("podcastRole", self.podcast_role)
            .with("shareRole", self.share_role)
            .with("videoConversionRole", self.video_conversion_role)
            .with("musicFolderId", self.music_folder_id)
            .with("maxBitRate", self.max_bit_rate)
    }
}
