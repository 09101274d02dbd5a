//! Clipboard capture: the history list and the polling monitor.

pub mod history;
pub mod monitor;
