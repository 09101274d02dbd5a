//! Core widget logic: clipboard capture and window gestures.

pub mod clipboard;
pub mod window;
