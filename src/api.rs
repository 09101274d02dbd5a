//! IPC surface invoked by the widget webview.

pub mod commands;
