use serde::Serialize;
use thiserror::Error;

/// Backend errors, serializable so they cross the IPC boundary intact.
#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("Clipboard Error: {0}")]
    Clipboard(String),

    #[error("Window Error: {0}")]
    Window(String),

    #[error("System Error: {0}")]
    System(String),
}

impl From<tauri::Error> for AppError {
    fn from(err: tauri::Error) -> Self {
        AppError::Window(err.to_string())
    }
}

// Helper for Tauri Result
pub type AppResult<T> = Result<T, AppError>;
