use chrono::{DateTime, Utc};
use opensubsonic_client::{Params, SubsonicResponse};
use tracing::instrument;

use crate::chat::ChatMessage;
use crate::error::Result;

impl super::SubsonicApi {
    /// Chat messages, optionally only those posted after `since`.
    #[instrument(skip(self))]
    pub async fn get_chat_messages(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<ChatMessage>> {
        let params = Params::new().with("since", since.map(|t| t.timestamp_millis()));
        self.fetch_list("getChatMessages", "chatMessages", "chatMessage", params)
            .await
    }

    #[instrument(skip(self))]
    pub async fn add_chat_message(&self, message: &str) -> Result<SubsonicResponse> {
        self.call("addChatMessage", Params::new().with("message", message))
            .await
    }
}
