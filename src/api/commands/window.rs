//! Window gesture commands.
//!
//! The webview owns no geometry: pointer events on the title bar and the
//! corner grip are forwarded here, and the backend computes and applies
//! the new window origin or size immediately.

use tauri::{LogicalPosition, LogicalSize, State, WebviewWindow};

use crate::core::window::{GestureState, MoveGesture, ResizeGesture, WidgetGesture};
use crate::shared::error::{AppError, AppResult};

/// Title-bar pointer-down: record the pointer's offset within the bar
#[tauri::command]
pub fn begin_widget_move(gestures: State<'_, GestureState>, x: f64, y: f64) -> AppResult<()> {
    gestures.begin(WidgetGesture::Move(MoveGesture::begin(x, y)));
    Ok(())
}

/// Grip pointer-down: record the screen anchor and the current inner size
#[tauri::command]
pub fn begin_widget_resize(
    window: WebviewWindow,
    gestures: State<'_, GestureState>,
    x: f64,
    y: f64,
) -> AppResult<()> {
    let scale = window.scale_factor()?;
    let size = window.inner_size()?.to_logical::<f64>(scale);
    gestures.begin(WidgetGesture::Resize(ResizeGesture::begin(
        x,
        y,
        size.width,
        size.height,
    )));
    Ok(())
}

/// Pointer motion in screen coordinates while a button is held.
///
/// Dispatches on whichever gesture is in flight; motion with no recorded
/// gesture is a silent no-op.
#[tauri::command]
pub fn drag_widget(
    window: WebviewWindow,
    gestures: State<'_, GestureState>,
    x: f64,
    y: f64,
) -> AppResult<()> {
    match gestures.current() {
        Some(WidgetGesture::Move(gesture)) => {
            let (origin_x, origin_y) = gesture.origin_for(x, y);
            window
                .set_position(LogicalPosition::new(origin_x, origin_y))
                .map_err(|e| AppError::Window(format!("Failed to move widget: {}", e)))?;
        }
        Some(WidgetGesture::Resize(gesture)) => {
            let (width, height) = gesture.size_for(x, y);
            window
                .set_size(LogicalSize::new(width, height))
                .map_err(|e| AppError::Window(format!("Failed to resize widget: {}", e)))?;
        }
        None => {}
    }
    Ok(())
}

/// Pointer-up: clear the gesture anchor
#[tauri::command]
pub fn end_widget_gesture(gestures: State<'_, GestureState>) -> AppResult<()> {
    gestures.end();
    Ok(())
}

/// Destroy the widget window immediately. No confirmation; the destroy
/// hook in `lib.rs` stops the poll task.
#[tauri::command]
pub fn close_widget(window: WebviewWindow) -> AppResult<()> {
    window
        .destroy()
        .map_err(|e| AppError::Window(format!("Failed to close widget: {}", e)))
}
