use tauri::State;

use crate::core::clipboard::history::ClipboardHistory;
use crate::shared::error::AppResult;
use crate::shared::types::ClipboardEntry;

/// Full capture history in insertion order, used to fill the panel when
/// the webview loads. Later entries arrive via `clipboard://captured`.
#[tauri::command]
pub fn get_clipboard_history(
    history: State<'_, ClipboardHistory>,
) -> AppResult<Vec<ClipboardEntry>> {
    Ok(history.entries())
}
