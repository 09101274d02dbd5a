use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single captured clipboard snippet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: String,
    pub text: String,
    pub captured_at: DateTime<Utc>,
}

impl ClipboardEntry {
    /// Create a new text entry
    pub fn new_text(text: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            captured_at: Utc::now(),
        }
    }
}
