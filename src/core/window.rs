//! Window gestures: title-bar move and corner-handle resize.

pub mod gesture;

pub use gesture::{GestureState, MoveGesture, ResizeGesture, WidgetGesture, MIN_HEIGHT, MIN_WIDTH};
