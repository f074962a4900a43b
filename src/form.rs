//! Staging-field state for the point entry row.
//!
//! The two entry fields hold raw user text until a commit. A commit either
//! lands in the [`Profile`] or produces a single field-scoped error that the
//! UI renders under the offending input.

use crate::profile::Profile;

/// Identifies one of the two entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Time,
    Current,
}

/// Field-scoped validation failure raised when a commit is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
    /// Whether keyboard focus should move to the offending field.
    pub focus: bool,
}

impl FieldError {
    fn required(field: FormField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
            focus: true,
        }
    }
}

/// Transient entry state: the two staging inputs plus the active error.
#[derive(Debug, Clone, Default)]
pub struct PointForm {
    pub time_input: String,
    pub current_input: String,
    error: Option<FieldError>,
    focus_request: Option<FormField>,
}

impl PointForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed validation error, if any.
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// The error message targeting `field`, if the active error is on it.
    pub fn error_on(&self, field: FormField) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Clear both inputs and any error.
    pub fn reset(&mut self) {
        self.time_input.clear();
        self.current_input.clear();
        self.error = None;
        self.focus_request = None;
    }

    /// Take the queued focus move, if any. The UI polls this once per frame
    /// and requests focus on the matching widget.
    pub fn take_focus_request(&mut self) -> Option<FormField> {
        self.focus_request.take()
    }

    /// Validate the staging fields and commit them into `profile`.
    ///
    /// On success the inputs are cleared and focus returns to the time
    /// field. On failure the profile is untouched and the error is stored
    /// for display, with focus queued on the offending field.
    pub fn commit(&mut self, profile: &mut Profile) -> Result<(), FieldError> {
        self.error = None;

        let time = match parse_time(&self.time_input) {
            Ok(t) => t,
            Err(e) => return Err(self.fail(e)),
        };
        let current = match parse_current(&self.current_input) {
            Ok(c) => c,
            Err(e) => return Err(self.fail(e)),
        };

        profile.add_or_update(time, current);
        self.time_input.clear();
        self.current_input.clear();
        self.focus_request = Some(FormField::Time);
        Ok(())
    }

    fn fail(&mut self, error: FieldError) -> FieldError {
        if error.focus {
            self.focus_request = Some(error.field);
        }
        self.error = Some(error.clone());
        error
    }
}

fn parse_time(input: &str) -> Result<f64, FieldError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FieldError::required(
            FormField::Time,
            "Enter the time in seconds",
        ));
    }
    match input.parse::<f64>() {
        Ok(t) if t.is_finite() && t >= 0.0 => Ok(t),
        _ => Err(FieldError::required(
            FormField::Time,
            "Time must be a non-negative number of seconds",
        )),
    }
}

fn parse_current(input: &str) -> Result<f64, FieldError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FieldError::required(
            FormField::Current,
            "Enter the current the load should hold",
        ));
    }
    match input.parse::<f64>() {
        Ok(c) if c.is_finite() => Ok(c),
        _ => Err(FieldError::required(
            FormField::Current,
            "Current must be a number of amperes",
        )),
    }
}
