use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload placed on the author deletion queue.
///
/// `request_id` identifies one HTTP request, so redeliveries of the same
/// message share it and can be correlated in the consumer logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDeletionMessage {
    pub request_id: Uuid,
    pub author_id: i64,
    pub requested_at: DateTime<Utc>,
}

impl AuthorDeletionMessage {
    pub fn new(author_id: i64, requested_at: DateTime<Utc>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            author_id,
            requested_at,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}
