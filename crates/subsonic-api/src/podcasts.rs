//! Podcast channels and episodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::browsing::Child;

/// Download state of a channel or episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PodcastStatus {
    New,
    Downloading,
    Completed,
    Error,
    Deleted,
    Skipped,
    #[serde(other)]
    Unknown,
}

/// A subscribed podcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastChannel {
    pub id: String,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_art: Option<String>,
    pub original_image_url: Option<String>,
    pub status: PodcastStatus,
    pub error_message: Option<String>,
    #[serde(default)]
    pub episode: Vec<PodcastEpisode>,
}

/// One episode of a podcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastEpisode {
    #[serde(flatten)]
    pub entry: Child,
    /// Id to pass to `stream` once downloaded.
    pub stream_id: Option<String>,
    pub channel_id: String,
    pub description: Option<String>,
    pub status: PodcastStatus,
    pub publish_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_with_episodes() {
        let json = r#"{
            "id": "ch-1",
            "url": "https://feeds.example.com/show.xml",
            "title": "Show",
            "status": "completed",
            "episode": [{
                "id": "ep-1",
                "title": "Pilot",
                "isDir": false,
                "streamId": "tr-77",
                "channelId": "ch-1",
                "status": "downloading",
                "publishDate": "2023-11-05T06:00:00Z"
            }]
        }"#;
        let channel: PodcastChannel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.status, PodcastStatus::Completed);
        let episode = &channel.episode[0];
        assert_eq!(episode.entry.title, "Pilot");
        assert_eq!(episode.status, PodcastStatus::Downloading);
        assert_eq!(episode.stream_id.as_deref(), Some("tr-77"));
    }
}
