//! Chat messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub username: String,
    /// Milliseconds since the epoch.
    pub time: i64,
    pub message: String,
}

impl ChatMessage {
    /// Time the message was posted.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posted_at() {
        let msg: ChatMessage = serde_json::from_str(
            r#"{"username": "alice", "time": 1704067200000, "message": "hi"}"#,
        )
        .unwrap();
        assert_eq!(
            msg.posted_at().unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }
}
