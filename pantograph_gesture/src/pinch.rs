// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch state: scale factor and center movement of a two-pointer gesture.
//!
//! A pinch is measured against a *baseline*, the center and distance of the two
//! pointers at the previous step. Each [`PinchState::update`] compares the new
//! pair against the baseline and then replaces it.
//!
//! The baseline is dropped by [`PinchState::end`]. A move that arrives with no
//! baseline only establishes one, so a pinch that resumes after a gap never
//! computes a step from stale positions.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use pantograph_gesture::pinch::{PinchState, PinchUpdate};
//!
//! let mut pinch = PinchState::default();
//! pinch.start(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
//!
//! let PinchUpdate::Moved(step) = pinch.update(Point::new(0.0, 0.0), Point::new(20.0, 0.0)) else {
//!     panic!("expected a pinch step");
//! };
//! assert_eq!(step.factor, 2.0);
//! assert_eq!(step.pan(), Vec2::new(5.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

/// Default distance below which two pointers count as coincident.
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-6;

/// Center and spread of a pair of pointers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Midpoint of the two pointers.
    pub center: Point,
    /// Euclidean distance between the two pointers.
    pub distance: f64,
}

impl PinchSample {
    /// Measures the pair `p1`, `p2`.
    #[must_use]
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self {
            center: p1.midpoint(p2),
            distance: p1.distance(p2),
        }
    }
}

/// One usable pinch step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Ratio of the new pointer distance to the baseline distance.
    pub factor: f64,
    /// Center of the pointers after the step.
    pub center: Point,
    /// Center of the pointers before the step.
    pub previous_center: Point,
}

impl PinchStep {
    /// Movement of the pinch center during this step.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.center - self.previous_center
    }
}

/// Result of feeding a pointer pair into [`PinchState::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchUpdate {
    /// There was no usable baseline; this pair became the baseline.
    Anchored,
    /// The pointers are (nearly) coincident; the update was skipped and the
    /// baseline kept.
    Degenerate,
    /// A step relative to the baseline.
    Moved(PinchStep),
}

/// Tracks the baseline of a two-pointer pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    baseline: Option<PinchSample>,
    min_distance: f64,
}

impl PinchState {
    /// Creates an idle pinch that treats distances below `min_distance` as degenerate.
    #[must_use]
    pub fn new(min_distance: f64) -> Self {
        Self {
            baseline: None,
            min_distance,
        }
    }

    /// Distance below which a pointer pair is ignored.
    #[must_use]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Starts a pinch with `p1`, `p2` as the baseline.
    pub fn start(&mut self, p1: Point, p2: Point) {
        self.baseline = Some(PinchSample::from_points(p1, p2));
    }

    /// Compares `p1`, `p2` against the baseline and advances it.
    pub fn update(&mut self, p1: Point, p2: Point) -> PinchUpdate {
        let sample = PinchSample::from_points(p1, p2);
        let Some(last) = self.baseline else {
            self.baseline = Some(sample);
            return PinchUpdate::Anchored;
        };
        if !self.is_usable(sample.distance) {
            return PinchUpdate::Degenerate;
        }
        self.baseline = Some(sample);
        if !self.is_usable(last.distance) {
            // A coincident baseline has no meaningful ratio.
            return PinchUpdate::Anchored;
        }
        PinchUpdate::Moved(PinchStep {
            factor: sample.distance / last.distance,
            center: sample.center,
            previous_center: last.center,
        })
    }

    /// Ends the pinch; the next update re-anchors.
    pub fn end(&mut self) {
        self.baseline = None;
    }

    /// Returns `true` while a baseline exists.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    /// The current baseline, if any.
    #[must_use]
    pub fn baseline(&self) -> Option<PinchSample> {
        self.baseline
    }

    fn is_usable(&self, distance: f64) -> bool {
        distance.is_finite() && distance >= self.min_distance
    }
}

impl Default for PinchState {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_measures_center_and_distance() {
        let s = PinchSample::from_points(Point::new(0.0, 0.0), Point::new(6.0, 8.0));
        assert_eq!(s.center, Point::new(3.0, 4.0));
        assert_eq!(s.distance, 10.0);
    }

    #[test]
    fn update_without_start_anchors() {
        let mut pinch = PinchState::default();
        let update = pinch.update(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(update, PinchUpdate::Anchored);
        assert!(pinch.is_active());
    }

    #[test]
    fn steps_are_relative_to_previous_sample() {
        let mut pinch = PinchState::default();
        pinch.start(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        let PinchUpdate::Moved(first) = pinch.update(Point::new(0.0, 0.0), Point::new(20.0, 0.0))
        else {
            panic!("expected a step");
        };
        assert_eq!(first.factor, 2.0);
        assert_eq!(first.previous_center, Point::new(5.0, 0.0));
        assert_eq!(first.center, Point::new(10.0, 0.0));

        let PinchUpdate::Moved(second) =
            pinch.update(Point::new(0.0, 0.0), Point::new(10.0, 0.0))
        else {
            panic!("expected a step");
        };
        assert_eq!(second.factor, 0.5);
        assert_eq!(second.pan(), Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn end_then_move_reanchors_instead_of_jumping() {
        let mut pinch = PinchState::default();
        pinch.start(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        pinch.end();
        assert!(!pinch.is_active());

        // Fingers come back far apart; that must not read as a 10x zoom.
        let update = pinch.update(Point::new(100.0, 100.0), Point::new(200.0, 100.0));
        assert_eq!(update, PinchUpdate::Anchored);

        let PinchUpdate::Moved(step) =
            pinch.update(Point::new(100.0, 100.0), Point::new(210.0, 100.0))
        else {
            panic!("expected a step");
        };
        assert!((step.factor - 1.1).abs() < 1e-12);
    }

    #[test]
    fn coincident_pointers_are_skipped() {
        let mut pinch = PinchState::default();
        pinch.start(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        let p = Point::new(5.0, 5.0);
        assert_eq!(pinch.update(p, p), PinchUpdate::Degenerate);
        // The baseline survives the skipped update.
        assert_eq!(pinch.baseline().map(|b| b.distance), Some(10.0));
    }

    #[test]
    fn coincident_baseline_reanchors() {
        let mut pinch = PinchState::default();
        let p = Point::new(5.0, 5.0);
        pinch.start(p, p);

        let update = pinch.update(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(update, PinchUpdate::Anchored);
        assert_eq!(pinch.baseline().map(|b| b.distance), Some(10.0));
    }

    #[test]
    fn threshold_is_configurable() {
        let mut pinch = PinchState::new(20.0);
        pinch.start(Point::new(0.0, 0.0), Point::new(30.0, 0.0));
        assert_eq!(
            pinch.update(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            PinchUpdate::Degenerate
        );
        assert_eq!(pinch.min_distance(), 20.0);
    }
}
