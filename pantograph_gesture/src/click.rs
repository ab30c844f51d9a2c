// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition with a movement tolerance.
//!
//! A press becomes a click if the pointer is released without ever travelling
//! further than the *slop* radius from where it went down. Anything further is a
//! drag, and releasing it produces nothing.
//!
//! ```
//! use kurbo::Point;
//! use pantograph_gesture::click::ClickState;
//!
//! let mut click = ClickState::new(4.0);
//! click.press(Point::new(10.0, 10.0));
//! click.moved(Point::new(12.0, 11.0));
//! assert_eq!(click.release(), Some(Point::new(10.0, 10.0)));
//!
//! click.press(Point::new(10.0, 10.0));
//! click.moved(Point::new(40.0, 10.0));
//! assert_eq!(click.release(), None);
//! ```

use kurbo::Point;

/// Default slop radius in logical pixels.
pub const DEFAULT_SLOP: f64 = 4.0;

/// Tracks whether the current press is still a click candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickState {
    press: Option<Point>,
    armed: bool,
    slop: f64,
}

impl ClickState {
    /// Creates an idle recognizer with the given slop radius.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            press: None,
            armed: false,
            slop,
        }
    }

    /// Slop radius in the same units as the positions.
    #[must_use]
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Pointer went down at `pos`.
    pub fn press(&mut self, pos: Point) {
        self.press = Some(pos);
        self.armed = true;
    }

    /// Pointer moved to `pos`; leaving the slop radius disarms the click.
    pub fn moved(&mut self, pos: Point) {
        if let Some(press) = self.press
            && self.armed
            && press.distance(pos) > self.slop
        {
            self.armed = false;
        }
    }

    /// Pointer went up. Returns the press position if this was a click.
    pub fn release(&mut self) -> Option<Point> {
        let click = self.press.filter(|_| self.armed);
        self.cancel();
        click
    }

    /// Abandons the current press, for example when a pinch takes over.
    pub fn cancel(&mut self) {
        self.press = None;
        self.armed = false;
    }

    /// Returns `true` while a press is still a click candidate.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for ClickState {
    fn default() -> Self {
        Self::new(DEFAULT_SLOP)
    }
}
