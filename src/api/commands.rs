//! Command modules for the widget.
//!
//! - `clipboard`: history queries for the text panel
//! - `window`: move, resize and close, driven by pointer events on the
//!   title bar and the corner grip

pub mod clipboard;
pub mod window;
