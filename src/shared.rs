//! Types shared between the backend modules and the webview IPC boundary.

pub mod emit;
pub mod error;
pub mod events;
pub mod types;
