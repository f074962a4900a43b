//! LoadProfile crate root: re-exports and module wiring.
//!
//! This crate provides an interactive editor for piecewise-constant current
//! profiles, built on egui/eframe. A profile is an ordered list of
//! (time, current) control points; the load holds each current until the
//! next point's time, and holds the last value forever via a synthetic
//! point at `time = infinity`.
//!
//! Modules:
//! - `profile`: control point data model and invariant maintenance
//! - `form`: staging-field state and validation for the entry row
//! - `chart`: stairstep plot projection of a profile
//! - `editor_ui`: the combined chart + table widget
//! - `config`: configuration for standalone use
//! - `run`: native window entry point

pub mod chart;
pub mod config;
pub mod editor_ui;
pub mod form;
pub mod profile;
mod run;

// Public re-exports for a compact external API
pub use config::EditorConfig;
pub use editor_ui::ProfileEditor;
pub use form::{FieldError, FormField, PointForm};
pub use profile::{ControlPoint, Profile};
pub use run::run_editor;
