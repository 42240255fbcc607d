use serde::{Deserialize, Serialize};

/// A reference entry (an animation, a video channel, a toy...) that
/// counselors look up while writing scripts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentInfo {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPayload {
    pub title: String,
    pub content: String,
    pub category: String,
}
