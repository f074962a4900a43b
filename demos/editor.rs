//! Standalone profile editor demo.
//!
//! Run with: cargo run --example editor

use loadprofile::{ControlPoint, EditorConfig};

fn main() -> eframe::Result<()> {
    loadprofile::run_editor(EditorConfig {
        title: "Controller profile".to_string(),
        initial_points: vec![
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(5.0, 2.0),
            ControlPoint::new(12.0, 0.5),
        ],
        ..Default::default()
    })
}
