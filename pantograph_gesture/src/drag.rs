// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state: movement deltas for a single pressed pointer.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] on pointer down.
//! 2) On each move, call [`DragState::update`] to get the movement since the last move.
//! 3) When a second pointer takes over (a pinch), call [`DragState::suspend`]. The drag
//!    stays pressed but forgets its last position, so the first move afterwards only
//!    re-anchors instead of producing a jump.
//! 4) Call [`DragState::end`] on pointer up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use pantograph_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(100.0, 100.0));
//!
//! assert_eq!(drag.update(Point::new(150.0, 80.0)), Some(Vec2::new(50.0, -20.0)));
//!
//! // A pinch interrupts; the next move re-anchors.
//! drag.suspend();
//! assert_eq!(drag.update(Point::new(400.0, 400.0)), None);
//! assert_eq!(drag.update(Point::new(410.0, 400.0)), Some(Vec2::new(10.0, 0.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pressed pointer across move events.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    pressed: bool,
    last: Option<Point>,
}

impl DragState {
    /// Starts a new drag at `pos`, replacing any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.pressed = true;
        self.last = Some(pos);
    }

    /// Records a move to `pos` and returns the delta since the previous position.
    ///
    /// Returns `None` when no drag is active, or when the drag was suspended and
    /// this move only re-establishes the anchor.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if !self.pressed {
            return None;
        }
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Keeps the drag pressed but forgets where the pointer last was.
    pub fn suspend(&mut self) {
        self.last = None;
    }

    /// Ends the drag and resets all state.
    pub fn end(&mut self) {
        self.pressed = false;
        self.last = None;
    }

    /// Returns `true` while a pointer is pressed.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pressed
    }

    /// Most recent anchor position.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last
    }
}
