//! Shares.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::browsing::Child;

/// A public link to one or more entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub id: String,
    pub url: String,
    pub description: Option<String>,
    pub username: String,
    pub created: DateTime<Utc>,
    pub expires: Option<DateTime<Utc>>,
    pub last_visited: Option<DateTime<Utc>>,
    #[serde(default)]
    pub visit_count: u32,
    #[serde(default)]
    pub entry: Vec<Child>,
}
