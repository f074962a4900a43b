//! Control point data model for piecewise-constant current profiles.
//!
//! A profile is an ordered list of (time, current) control points. The load
//! holds each point's current until the next point's time. The final entry
//! always carries `time = f64::INFINITY` and mirrors the current of the last
//! finite point, so the profile holds its last defined value forever.

use serde::{Deserialize, Serialize};

// Feature-gated debug logging for the horizon-repair step.
// Enable prints with: cargo test --features normalize_debug
// or for your binary accordingly. When the feature is disabled, logs are compiled out.
#[cfg(feature = "normalize_debug")]
#[allow(unused_macros)]
macro_rules! normalize_debug { ($($arg:tt)*) => { eprintln!($($arg)*); } }

#[cfg(not(feature = "normalize_debug"))]
#[allow(unused_macros)]
macro_rules! normalize_debug {
    ($($arg:tt)*) => {{ /* no-op */ }};
}

/// A single (time, current) target of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Time offset in seconds. `f64::INFINITY` marks the hold-forever point.
    pub time: f64,
    /// Target current in amperes.
    pub current: f64,
}

impl ControlPoint {
    pub fn new(time: f64, current: f64) -> Self {
        Self { time, current }
    }

    /// The synthetic terminal point holding `current` forever.
    pub fn horizon(current: f64) -> Self {
        Self {
            time: f64::INFINITY,
            current,
        }
    }

    /// Returns `true` if this is the infinite-horizon point.
    pub fn is_horizon(&self) -> bool {
        self.time == f64::INFINITY
    }
}

/// Ordered sequence of control points, unique by time.
///
/// Invariants, restored by [`Profile::normalize`] after every mutation:
/// - points are sorted ascending by `time`
/// - the last point is the infinite-horizon point, and it is the only one
/// - the horizon point's `current` equals its predecessor's `current`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    points: Vec<ControlPoint>,
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile {
    /// A fresh profile holding 0 A forever.
    pub fn new() -> Self {
        Self {
            points: vec![ControlPoint::new(0.0, 0.0), ControlPoint::horizon(0.0)],
        }
    }

    /// Build a profile from caller-supplied points, normalizing immediately.
    pub fn from_points(points: Vec<ControlPoint>) -> Self {
        let mut profile = Self { points };
        profile.normalize();
        profile
    }

    /// All points in order, including the trailing horizon point.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// The points shown as editable rows: everything except the horizon point.
    pub fn editable_points(&self) -> &[ControlPoint] {
        match self.points.split_last() {
            Some((last, rest)) if last.is_horizon() => rest,
            _ => &self.points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Insert a new point, or replace the current of an existing point with
    /// the same time.
    pub fn add_or_update(&mut self, time: f64, current: f64) {
        if let Some(existing) = self.points.iter_mut().find(|p| p.time == time) {
            existing.current = current;
        } else {
            self.points.push(ControlPoint::new(time, current));
        }
        self.normalize();
    }

    /// Remove the point at `index`. The seed point at `time = 0` and the
    /// horizon point stay put; removing them is a no-op.
    ///
    /// Returns `true` if a point was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.points.get(index) {
            Some(p) if p.time != 0.0 && !p.is_horizon() => {
                self.points.remove(index);
                self.normalize();
                true
            }
            _ => false,
        }
    }

    /// Restore the profile invariants: sort ascending by time, append a
    /// horizon point if none exists, then mirror the last finite current
    /// into it.
    ///
    /// Returns `true` if the sequence changed, so callers can skip redundant
    /// re-commits. Running it twice in a row always reports no change.
    pub fn normalize(&mut self) -> bool {
        let before = self.points.clone();

        self.points.sort_by(|a, b| a.time.total_cmp(&b.time));
        // collapse duplicate horizon points; the surviving one is re-derived below
        while self.points.len() >= 2 && self.points[self.points.len() - 2].is_horizon() {
            self.points.remove(self.points.len() - 2);
        }
        if !self.points.last().is_some_and(|p| p.is_horizon()) {
            self.points.push(ControlPoint::horizon(0.0));
        }
        if self.points.len() >= 2 {
            let held = self.points[self.points.len() - 2].current;
            normalize_debug!(
                "normalize: horizon {} <- predecessor {}",
                self.points[self.points.len() - 1].current,
                held
            );
            let last = self.points.len() - 1;
            self.points[last].current = held;
        }

        self.points != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_seeds_zero_and_horizon() {
        let p = Profile::new();
        assert_eq!(
            p.points(),
            &[ControlPoint::new(0.0, 0.0), ControlPoint::horizon(0.0)]
        );
    }

    #[test]
    fn normalize_sorts_and_repairs_horizon() {
        let mut p = Profile::from_points(vec![
            ControlPoint::new(10.0, 4.0),
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(3.0, 1.5),
        ]);
        // from_points already normalized: sorted, horizon appended and mirrored
        assert_eq!(
            p.points(),
            &[
                ControlPoint::new(0.0, 0.0),
                ControlPoint::new(3.0, 1.5),
                ControlPoint::new(10.0, 4.0),
                ControlPoint::horizon(4.0),
            ]
        );
        // Settled: a second run is a fixed point
        assert!(!p.normalize());
    }

    #[test]
    fn normalize_handles_the_two_seed_points() {
        // Both seeds carry 0 A; the mirror step is a no-op, not an error
        let mut p = Profile::new();
        assert!(!p.normalize());
        assert_eq!(p.points()[1], ControlPoint::horizon(0.0));
    }

    #[test]
    fn editable_points_exclude_horizon() {
        let mut p = Profile::new();
        p.add_or_update(5.0, 2.0);
        assert_eq!(
            p.editable_points(),
            &[ControlPoint::new(0.0, 0.0), ControlPoint::new(5.0, 2.0)]
        );
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut p = Profile::new();
        assert!(!p.remove(99));
        assert_eq!(p.len(), 2);
    }
}
