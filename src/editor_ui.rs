//! Profile editor widget: chart plus editable control point table.
//!
//! The table shows one row per control point except the trailing
//! infinite-horizon point, which is maintained automatically and never
//! rendered as an editable row. Above the table sits a perpetual entry
//! strip with the two staging inputs and an add button.

use eframe::egui;
use egui::Color32;
use egui_phosphor::regular::{PLUS, TRASH};
use egui_table::{HeaderRow as EgHeaderRow, Table, TableDelegate};

use crate::chart;
use crate::form::{FormField, PointForm};
use crate::profile::{ControlPoint, Profile};

const TIME_COL_W: f32 = 152.0;
const CURRENT_COL_W: f32 = 152.0;
const ACTION_COL_W: f32 = 56.0;

/// Interactive editor for a piecewise-constant current profile.
pub struct ProfileEditor {
    pub profile: Profile,
    pub form: PointForm,
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self {
            profile: Profile::new(),
            form: PointForm::new(),
        }
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile,
            form: PointForm::new(),
        }
    }

    /// Render the chart and the point table.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        chart::show_chart(ui, &self.profile);
        ui.add_space(8.0);
        self.show_entry_row(ui);
        ui.add_space(4.0);
        self.show_point_table(ui);
    }

    fn show_entry_row(&mut self, ui: &mut egui::Ui) {
        let time_id = ui.id().with("point_time");
        let current_id = ui.id().with("point_current");

        // Apply a queued focus move before drawing the fields.
        if let Some(field) = self.form.take_focus_request() {
            let id = match field {
                FormField::Time => time_id,
                FormField::Current => current_id,
            };
            ui.memory_mut(|m| m.request_focus(id));
        }

        let mut commit = false;
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                let r = ui
                    .add(
                        egui::TextEdit::singleline(&mut self.form.time_input)
                            .id(time_id)
                            .hint_text("Time (s)")
                            .desired_width(TIME_COL_W),
                    )
                    .on_hover_ui(|ui| {
                        ui.strong("Enter the time in seconds.");
                        ui.label("Entering an existing time edits that point's current.");
                    });
                if r.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    commit = true;
                }
                if let Some(msg) = self.form.error_on(FormField::Time) {
                    ui.colored_label(Color32::LIGHT_RED, msg);
                }
            });
            ui.vertical(|ui| {
                let r = ui
                    .add(
                        egui::TextEdit::singleline(&mut self.form.current_input)
                            .id(current_id)
                            .hint_text("Current (A)")
                            .desired_width(CURRENT_COL_W),
                    )
                    .on_hover_ui(|ui| {
                        ui.strong("Enter the expected current in amperes.");
                    });
                if r.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    commit = true;
                }
                if let Some(msg) = self.form.error_on(FormField::Current) {
                    ui.colored_label(Color32::LIGHT_RED, msg);
                }
            });
            if ui
                .button(PLUS)
                .on_hover_text("Add point to the profile")
                .clicked()
            {
                commit = true;
            }
        });

        if commit {
            // Failures land on the form and render inline next frame.
            let _ = self.form.commit(&mut self.profile);
        }
    }

    fn show_point_table(&mut self, ui: &mut egui::Ui) {
        let rows = self.profile.editable_points().to_vec();

        let mut delegate = PointRowsDelegate {
            rows: &rows,
            to_remove: None,
        };
        let cols = vec![
            egui_table::Column::new(TIME_COL_W),
            egui_table::Column::new(CURRENT_COL_W),
            egui_table::Column::new(ACTION_COL_W),
        ];
        let total_w = TIME_COL_W + CURRENT_COL_W + ACTION_COL_W;
        let total_h = 24.0 + rows.len() as f32 * 26.0 + 8.0;
        let (rect, _resp) =
            ui.allocate_exact_size(egui::vec2(total_w, total_h), egui::Sense::hover());
        let ui_builder = egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::left_to_right(egui::Align::Min));
        let mut table_ui = ui.new_child(ui_builder);
        Table::new()
            .id_salt("profile_points_table")
            .num_rows(rows.len() as u64)
            .columns(cols)
            .headers(vec![EgHeaderRow::new(24.0)])
            .show(&mut table_ui, &mut delegate);

        // Apply row removals after rendering. Editable rows share indices
        // with the full sequence because the horizon point sorts last.
        if let Some(idx) = delegate.to_remove {
            self.profile.remove(idx);
        }
    }
}

/// Delegate rendering the committed control points with egui_table.
struct PointRowsDelegate<'a> {
    rows: &'a [ControlPoint],
    to_remove: Option<usize>,
}

impl<'a> TableDelegate for PointRowsDelegate<'a> {
    fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
        let text = match cell.col_range.start {
            0 => "Time (s)",
            1 => "Current (A)",
            _ => "",
        };
        ui.add_space(4.0);
        ui.strong(text);
    }

    fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
        let row = cell.row_nr as usize;
        let Some(point) = self.rows.get(row).copied() else {
            return;
        };
        ui.add_space(4.0);
        match cell.col_nr {
            0 => {
                ui.label(format!("{}", point.time));
            }
            1 => {
                ui.label(format!("{}", point.current));
            }
            2 => {
                // The t=0 seed point has no remove affordance.
                if point.time != 0.0 {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .small_button(TRASH)
                            .on_hover_text("Remove this point from the profile")
                            .clicked()
                        {
                            self.to_remove = Some(row);
                        }
                    });
                }
            }
            _ => {}
        }
    }
}
