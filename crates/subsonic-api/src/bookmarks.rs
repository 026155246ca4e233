//! Bookmarks and the saved play queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::browsing::Child;

/// A saved position in a media file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Position in milliseconds.
    pub position: u64,
    pub username: String,
    pub comment: Option<String>,
    pub created: DateTime<Utc>,
    pub changed: DateTime<Utc>,
    pub entry: Child,
}

/// The play queue saved by `savePlayQueue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayQueue {
    /// Id of the current entry. Some servers send it as a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub current: Option<String>,
    /// Position in the current entry, in milliseconds.
    pub position: Option<u64>,
    pub username: String,
    pub changed: DateTime<Utc>,
    /// Client that saved the queue.
    pub changed_by: String,
    #[serde(default)]
    pub entry: Vec<Child>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    }))
}
