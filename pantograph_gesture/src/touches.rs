// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-pointer tracking: turn a raw stream of per-pointer events into
//! single-pointer and pinch transitions.
//!
//! Hosts that deliver touches one pointer at a time (each with an id) feed them
//! into a [`TouchTracker`]. The tracker remembers the active pointers in press
//! order; the first two form the pinch pair. Its output is what a pan/zoom
//! controller wants to hear: "one pointer moved", "a pinch started", "the pinch
//! pair moved", "the pinch ended".
//!
//! ```
//! use kurbo::Point;
//! use pantograph_gesture::touches::{TouchTracker, TouchTransition};
//!
//! let mut touches = TouchTracker::new();
//! assert_eq!(touches.down(1_u64, Point::new(0.0, 0.0)), TouchTransition::Down(Point::new(0.0, 0.0)));
//! assert_eq!(
//!     touches.down(2, Point::new(10.0, 0.0)),
//!     TouchTransition::PinchStart(Point::new(0.0, 0.0), Point::new(10.0, 0.0))
//! );
//! assert_eq!(
//!     touches.moved(2, Point::new(20.0, 0.0)),
//!     TouchTransition::PinchMove(Point::new(0.0, 0.0), Point::new(20.0, 0.0))
//! );
//! assert_eq!(touches.up(1), TouchTransition::PinchEnd);
//! assert_eq!(touches.up(2), TouchTransition::Up);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// What a pointer event means for pan/zoom handling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchTransition {
    /// The event does not affect pan/zoom (unknown pointer, or a third finger).
    Ignored,
    /// The first pointer went down.
    Down(Point),
    /// The only active pointer moved.
    Move(Point),
    /// The last active pointer went up.
    Up,
    /// A pinch pair formed, or the pair changed and must be re-anchored.
    PinchStart(Point, Point),
    /// One of the pinch pair moved; carries both current positions.
    PinchMove(Point, Point),
    /// The pinch pair broke up and one pointer remains.
    PinchEnd,
}

/// Active pointers keyed by a host-specific id, in press order.
#[derive(Clone, Debug)]
pub struct TouchTracker<K> {
    active: SmallVec<[(K, Point); 4]>,
}

impl<K: Copy + PartialEq> TouchTracker<K> {
    /// Creates a tracker with no active pointers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: SmallVec::new(),
        }
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if no pointer is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Pointer `id` went down at `pos`.
    pub fn down(&mut self, id: K, pos: Point) -> TouchTransition {
        if let Some(index) = self.index_of(id) {
            // Repeated down for a known pointer: treat it as a move.
            self.active[index].1 = pos;
            return self.moved_at(index);
        }
        self.active.push((id, pos));
        match self.active.len() {
            1 => TouchTransition::Down(pos),
            2 => self.pair_transition(TouchTransition::PinchStart),
            _ => TouchTransition::Ignored,
        }
    }

    /// Pointer `id` moved to `pos`.
    pub fn moved(&mut self, id: K, pos: Point) -> TouchTransition {
        let Some(index) = self.index_of(id) else {
            return TouchTransition::Ignored;
        };
        self.active[index].1 = pos;
        self.moved_at(index)
    }

    /// Pointer `id` went up or was cancelled.
    pub fn up(&mut self, id: K) -> TouchTransition {
        let Some(index) = self.index_of(id) else {
            return TouchTransition::Ignored;
        };
        let was_pair_member = index < 2;
        self.active.remove(index);
        match self.active.len() {
            0 => TouchTransition::Up,
            1 if was_pair_member => TouchTransition::PinchEnd,
            // A third finger lifted; the pair is unchanged.
            _ if !was_pair_member => TouchTransition::Ignored,
            // A new pair formed from the remaining pointers.
            _ => self.pair_transition(TouchTransition::PinchStart),
        }
    }

    /// Forgets every pointer, for example when the host window loses focus.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    fn moved_at(&self, index: usize) -> TouchTransition {
        match (self.active.len(), index) {
            (1, _) => TouchTransition::Move(self.active[0].1),
            (_, 0 | 1) => self.pair_transition(TouchTransition::PinchMove),
            _ => TouchTransition::Ignored,
        }
    }

    fn pair_transition(&self, make: fn(Point, Point) -> TouchTransition) -> TouchTransition {
        make(self.active[0].1, self.active[1].1)
    }

    fn index_of(&self, id: K) -> Option<usize> {
        self.active.iter().position(|(k, _)| *k == id)
    }
}

impl<K: Copy + PartialEq> Default for TouchTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
