//! Jukebox control.

use opensubsonic_client::Params;
use serde::{Deserialize, Serialize};

use crate::browsing::Child;

/// Jukebox action.
#[derive(Debug, Clone, PartialEq)]
pub enum JukeboxAction {
    /// Return the playlist (answered with [`JukeboxState::Playlist`]).
    Get,
    Status,
    /// Replace the playlist.
    Set(Vec<String>),
    Start,
    Stop,
    /// Jump to a playlist index, optionally at an offset in seconds.
    Skip { index: u32, offset: Option<u32> },
    Add(Vec<String>),
    Clear,
    Remove(u32),
    Shuffle,
    /// Volume between 0.0 and 1.0.
    SetGain(f32),
}

impl JukeboxAction {
    /// Wire value of the `action` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            JukeboxAction::Get => "get",
            JukeboxAction::Status => "status",
            JukeboxAction::Set(_) => "set",
            JukeboxAction::Start => "start",
            JukeboxAction::Stop => "stop",
            JukeboxAction::Skip { .. } => "skip",
            JukeboxAction::Add(_) => "add",
            JukeboxAction::Clear => "clear",
            JukeboxAction::Remove(_) => "remove",
            JukeboxAction::Shuffle => "shuffle",
            JukeboxAction::SetGain(_) => "setGain",
        }
    }

    pub(crate) fn into_params(self) -> Params {
        let params = Params::new().with("action", self.as_str());
        match self {
            JukeboxAction::Set(ids) | JukeboxAction::Add(ids) => params.with("id", ids),
            JukeboxAction::Skip { index, offset } => {
                params.with("index", index).with("offset", offset)
            }
            JukeboxAction::Remove(index) => params.with("index", index),
            JukeboxAction::SetGain(gain) => params.with("gain", gain),
            _ => params,
        }
    }
}

/// Jukebox playback state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JukeboxStatus {
    pub current_index: i32,
    pub playing: bool,
    pub gain: f32,
    /// Seconds into the current track.
    pub position: Option<u32>,
}

/// Jukebox state plus its playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JukeboxPlaylist {
    #[serde(flatten)]
    pub status: JukeboxStatus,
    #[serde(default)]
    pub entry: Vec<Child>,
}

/// Answer of `jukeboxControl`.
#[derive(Debug, Clone, PartialEq)]
pub enum JukeboxState {
    Status(JukeboxStatus),
    Playlist(JukeboxPlaylist),
}

impl JukeboxState {
    pub fn status(&self) -> &JukeboxStatus {
        match self {
            JukeboxState::Status(status) => status,
            JukeboxState::Playlist(playlist) => &playlist.status,
        }
    }
}
