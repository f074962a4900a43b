//! Top-level entry point for running the profile editor as a native window.
//!
//! [`run_editor`] is the primary public API for standalone use. It seeds the
//! editor from the configuration, installs the Phosphor icon font, and
//! enters the eframe event loop. The call blocks until the window is closed.

use eframe::egui;

use crate::config::EditorConfig;
use crate::editor_ui::ProfileEditor;
use crate::profile::Profile;

/// Launch the profile editor in a native window.
pub fn run_editor(mut cfg: EditorConfig) -> eframe::Result<()> {
    let editor = if cfg.initial_points.is_empty() {
        ProfileEditor::new()
    } else {
        ProfileEditor::with_profile(Profile::from_points(std::mem::take(
            &mut cfg.initial_points,
        )))
    };

    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a reasonable default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(900.0, 620.0));
    }

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(EditorApp { editor }))
        }),
    )
}

struct EditorApp {
    editor: ProfileEditor,
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.editor.show(ui);
            });
        });
    }
}
