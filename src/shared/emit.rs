use tauri::{AppHandle, Emitter};

use super::events::AppEvent;

/// Emit an application event to all windows.
///
/// Emission failures are logged and swallowed: a poll tick racing window
/// destruction must not take the poll task down with it.
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    match &event {
        AppEvent::ClipboardCaptured(entry) => {
            if let Err(e) = app.emit("clipboard://captured", entry) {
                eprintln!("Failed to emit clipboard capture: {}", e);
            }
        }
    }
}
