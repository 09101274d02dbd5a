// Module declarations - these are re-exported from their respective modules
mod api;
mod core;
mod shared;

use tauri::{Manager, WebviewUrl, WebviewWindowBuilder, WindowEvent};

use crate::core::clipboard::history::ClipboardHistory;
use crate::core::clipboard::monitor::ClipboardMonitor;
use crate::core::window::{GestureState, MIN_HEIGHT, MIN_WIDTH};

pub const WIDGET_WINDOW_LABEL: &str = "widget-window";

// Fixed initial placement, logical px
const INITIAL_WIDTH: f64 = 300.0;
const INITIAL_HEIGHT: f64 = 200.0;
const INITIAL_X: f64 = 100.0;
const INITIAL_Y: f64 = 100.0;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            // Initialize clipboard history and monitor
            let history = ClipboardHistory::new();
            let monitor = ClipboardMonitor::new(history.clone_arc());

            // Store in app state for access from commands
            app.manage(history);
            app.manage(monitor.clone_arc());
            app.manage(GestureState::default());

            // The one widget window: borderless, always on top, fixed
            // initial placement. Any failure here is fatal.
            let window = WebviewWindowBuilder::new(
                app,
                WIDGET_WINDOW_LABEL,
                WebviewUrl::App("index.html".into()),
            )
            .title("Clipboard History")
            .inner_size(INITIAL_WIDTH, INITIAL_HEIGHT)
            .min_inner_size(MIN_WIDTH, MIN_HEIGHT)
            .position(INITIAL_X, INITIAL_Y)
            .resizable(true)
            .decorations(false)
            .always_on_top(true)
            .skip_taskbar(true)
            .build()?;

            // Cancel the poll task once the window is gone; a tick delivered
            // after destruction must be a silent no-op.
            let destroy_monitor = monitor.clone_arc();
            window.on_window_event(move |event| {
                if let WindowEvent::Destroyed = event {
                    destroy_monitor.stop();
                    println!("[ClipboardWidget] Window destroyed, poll task cancelled");
                }
            });

            // Start clipboard monitoring
            monitor.start(app.handle().clone());
            println!("[ClipboardWidget] Clipboard monitoring started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::commands::clipboard::get_clipboard_history,
            api::commands::window::begin_widget_move,
            api::commands::window::begin_widget_resize,
            api::commands::window::drag_widget,
            api::commands::window::end_widget_gesture,
            api::commands::window::close_widget,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start clipboard widget: {}", e);
            std::process::exit(1);
        });
}
