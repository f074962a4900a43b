//! Stairstep chart projection of a profile.
//!
//! The profile is piecewise constant: each point's current is held until the
//! next point's time. The infinite-horizon segment is drawn by extending the
//! held value past the last finite time so egui_plot can autoscale.

use egui_plot::{Line, Plot, Points};

use crate::profile::Profile;

/// How far past the last finite point the hold-forever segment extends,
/// as a fraction of the finite time span.
const HORIZON_TAIL: f64 = 0.25;

/// Build the stairstep polyline for `profile`, with the horizon point
/// clamped to a finite x.
pub fn stairstep_points(profile: &Profile) -> Vec<[f64; 2]> {
    let pts = profile.points();
    if pts.is_empty() {
        return Vec::new();
    }

    let last_finite = pts
        .iter()
        .rev()
        .find(|p| !p.is_horizon())
        .map(|p| p.time)
        .unwrap_or(0.0);
    let x_end = if last_finite > 0.0 {
        last_finite * (1.0 + HORIZON_TAIL)
    } else {
        1.0
    };

    let mut out = Vec::with_capacity(pts.len() * 2);
    for pair in pts.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let step_x = if to.is_horizon() { x_end } else { to.time };
        out.push([from.time, from.current]);
        out.push([step_x, from.current]);
        if !to.is_horizon() {
            out.push([step_x, to.current]);
        }
    }
    out.dedup();
    out
}

/// Render the profile chart.
pub fn show_chart(ui: &mut egui::Ui, profile: &Profile) {
    let line_pts = stairstep_points(profile);
    let marker_pts: Vec<[f64; 2]> = profile
        .editable_points()
        .iter()
        .map(|p| [p.time, p.current])
        .collect();

    Plot::new("profile_chart")
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(true)
        .x_axis_label("Time (s)")
        .y_axis_label("Current (A)")
        .include_y(0.0)
        .height(220.0)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new("Profile", line_pts).width(2.0));
            plot_ui.points(Points::new("", marker_pts).radius(3.5));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ControlPoint;

    #[test]
    fn seed_profile_projects_a_flat_hold_line() {
        let pts = stairstep_points(&Profile::new());
        assert_eq!(pts, vec![[0.0, 0.0], [1.0, 0.0]]);
    }

    #[test]
    fn steps_rise_at_each_point_and_extend_past_the_last() {
        let profile = Profile::from_points(vec![
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(4.0, 2.0),
        ]);
        let pts = stairstep_points(&profile);
        assert_eq!(pts, vec![[0.0, 0.0], [4.0, 0.0], [4.0, 2.0], [5.0, 2.0]]);
    }
}
