use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tauri::AppHandle;
use tauri_plugin_clipboard_manager::ClipboardExt;
use tokio::time::{sleep, Duration};

use super::history::ClipboardHistory;
use crate::shared::emit::emit_event;
use crate::shared::events::AppEvent;

/// Fixed poll period. Read failures do not alter the schedule.
const POLL_INTERVAL_MS: u64 = 1000;

/// Clipboard monitor that polls for changes once per second
pub struct ClipboardMonitor {
    stopped: Arc<AtomicBool>,
    history: ClipboardHistory,
}

impl ClipboardMonitor {
    /// Create a new clipboard monitor
    pub fn new(history: ClipboardHistory) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            history,
        }
    }

    /// Spawn the poll task. It reschedules itself every second until
    /// [`stop`](Self::stop) is called.
    pub fn start(&self, app: AppHandle) {
        let stopped = Arc::clone(&self.stopped);
        let history = self.history.clone_arc();

        tauri::async_runtime::spawn(async move {
            println!("[ClipboardMonitor] Started polling");

            let mut consecutive_errors = 0u32;

            loop {
                if stopped.load(Ordering::SeqCst) {
                    println!("[ClipboardMonitor] Stopped");
                    break;
                }

                match app.clipboard().read_text() {
                    Ok(text) => {
                        consecutive_errors = 0;
                        if let Some(entry) = history.capture(&text) {
                            emit_event(&app, AppEvent::ClipboardCaptured(entry));
                        }
                    }
                    Err(e) => {
                        // Non-fatal: log at the poll boundary and keep the
                        // normal schedule. Only log the first failure and
                        // every 10th to avoid spam.
                        consecutive_errors += 1;
                        if consecutive_errors == 1 || consecutive_errors % 10 == 0 {
                            eprintln!(
                                "[ClipboardMonitor] Failed to read clipboard (error #{}): {}",
                                consecutive_errors, e
                            );
                        }
                    }
                }

                sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
            }
        });
    }

    /// Ask the poll task to exit on its next tick. Called from the
    /// window-destroyed hook; idempotent.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Whether the poll task has been asked to exit
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Get a clone for sharing across threads
    pub fn clone_arc(&self) -> Self {
        Self {
            stopped: Arc::clone(&self.stopped),
            history: self.history.clone_arc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_sticky_and_shared() {
        let monitor = ClipboardMonitor::new(ClipboardHistory::new());
        let handle = monitor.clone_arc();

        assert!(!monitor.is_stopped());

        handle.stop();
        assert!(monitor.is_stopped());

        // Idempotent
        monitor.stop();
        assert!(handle.is_stopped());
    }
}
