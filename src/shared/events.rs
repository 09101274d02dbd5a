use serde::{Deserialize, Serialize};

use super::types::ClipboardEntry;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
pub enum AppEvent {
    #[serde(rename = "clipboard://captured")]
    ClipboardCaptured(ClipboardEntry),
}
