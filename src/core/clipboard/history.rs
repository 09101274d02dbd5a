use std::sync::{Arc, Mutex};

use crate::shared::types::ClipboardEntry;

/// In-memory clipboard history.
///
/// Append-only and unbounded for the lifetime of the widget. Only an
/// immediately repeated value is suppressed; a value that reappears later
/// in the stream is stored again.
pub struct ClipboardHistory {
    entries: Arc<Mutex<Vec<ClipboardEntry>>>,
}

impl ClipboardHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Apply the append rule to one clipboard read.
    ///
    /// Empty text is never stored and never becomes the comparison point.
    /// Text equal to the last stored entry is skipped. Returns the stored
    /// entry when one was appended, for event emission.
    pub fn capture(&self, text: &str) -> Option<ClipboardEntry> {
        if text.is_empty() {
            return None;
        }

        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                eprintln!("[ClipboardHistory] Mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        };

        if entries.last().is_some_and(|last| last.text == text) {
            return None;
        }

        let entry = ClipboardEntry::new_text(text.to_string());
        entries.push(entry.clone());
        Some(entry)
    }

    /// Snapshot of all entries in insertion order
    pub fn entries(&self) -> Vec<ClipboardEntry> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a clone of the Arc for sharing across threads
    pub fn clone_arc(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl Default for ClipboardHistory {
    fn default() -> Self {
        Self::new()
    }
}
