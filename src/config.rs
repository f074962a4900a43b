//! Configuration for running the editor as a standalone window.

use crate::profile::ControlPoint;

/// Options for [`run_editor`](crate::run_editor).
pub struct EditorConfig {
    /// Window title.
    pub title: String,
    /// Initial control points. Normalized on startup; when empty, the
    /// editor starts from the default profile holding 0 A forever.
    pub initial_points: Vec<ControlPoint>,
    /// Native window options. Sensible defaults are applied when `None`.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: "Controller profile".to_string(),
            initial_points: Vec::new(),
            native_options: None,
        }
    }
}
