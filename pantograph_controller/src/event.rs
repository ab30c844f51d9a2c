// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// A discrete input event in logical screen coordinates (`y` down).
///
/// Hosts either call the `on_*` methods of
/// [`ViewportTransformController`](crate::ViewportTransformController) directly
/// or hand it these values through
/// [`handle`](crate::ViewportTransformController::handle). With the `serde`
/// feature, event sequences can be stored and replayed as JSON:
///
/// ```json
/// { "type": "wheel", "position": { "x": 100.0, "y": 100.0 }, "delta_y": -1.0 }
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum InputEvent {
    /// The primary pointer was pressed.
    PointerDown {
        /// Press position.
        position: Point,
    },
    /// The primary pointer moved.
    PointerMove {
        /// New position.
        position: Point,
    },
    /// The primary pointer was released.
    PointerUp,
    /// A wheel notch or scroll step.
    Wheel {
        /// Cursor position.
        position: Point,
        /// Vertical scroll amount; negative zooms in, positive zooms out.
        delta_y: f64,
    },
    /// A second pointer went down; `p1` and `p2` are both pointers.
    PinchStart {
        /// First pointer.
        p1: Point,
        /// Second pointer.
        p2: Point,
    },
    /// One of the pinch pointers moved.
    PinchMove {
        /// First pointer.
        p1: Point,
        /// Second pointer.
        p2: Point,
    },
    /// The two-pointer gesture ended.
    PinchEnd,
}

/// A click resolved into content space.
///
/// The controller does not know what is drawn; the rendering collaborator
/// hit-tests `content` against its display list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickRequest {
    /// Where the click happened, in logical screen coordinates.
    pub screen: Point,
    /// The content point under the click.
    pub content: Point,
}

/// What handling an event did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventOutcome {
    /// Nothing changed: the interaction is disabled, no gesture was active, or
    /// the input was degenerate.
    Ignored,
    /// Gesture state changed but the view transform did not.
    Tracked,
    /// The view transform changed; a redraw is due.
    Transformed,
    /// A click was recognized.
    Pick(PickRequest),
}

impl EventOutcome {
    /// Returns `true` if the view transform changed.
    #[must_use]
    pub fn is_transformed(&self) -> bool {
        matches!(self, Self::Transformed)
    }

    /// Returns the pick request, if this outcome carries one.
    #[must_use]
    pub fn pick(&self) -> Option<PickRequest> {
        match self {
            Self::Pick(pick) => Some(*pick),
            _ => None,
        }
    }
}
