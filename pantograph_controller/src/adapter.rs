// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feeding [`ui_events`] pointer streams into a controller.
//!
//! [`PointerEventAdapter`] keeps the per-pointer bookkeeping a windowing layer
//! leaves to the application: it tracks touches by pointer id, turns the first
//! two into pinch transitions, turns scroll deltas into wheel steps, and
//! forwards trackpad pinch gestures as zoom factors.

use log::trace;
use pantograph_gesture::touches::{TouchTracker, TouchTransition};
use ui_events::ScrollDelta;
use ui_events::pointer::{
    PointerButton, PointerEvent, PointerGesture, PointerId, PointerScrollEvent,
};

use crate::{EventOutcome, ViewportTransformController};

/// Routes [`PointerEvent`]s to a [`ViewportTransformController`].
#[derive(Clone, Debug)]
pub struct PointerEventAdapter {
    touches: TouchTracker<Option<PointerId>>,
    /// Flip the wheel direction so scrolling down zooms in.
    pub invert_wheel: bool,
}

impl PointerEventAdapter {
    /// Creates an adapter with no pointers down.
    #[must_use]
    pub fn new() -> Self {
        Self {
            touches: TouchTracker::new(),
            invert_wheel: false,
        }
    }

    /// Number of pointers the adapter believes are down.
    #[must_use]
    pub fn active_pointers(&self) -> usize {
        self.touches.len()
    }

    /// Applies `event` to `controller`.
    ///
    /// Secondary and auxiliary buttons are ignored, as are pointers beyond the
    /// first two. A cancelled pointer is treated like a release but never
    /// produces a pick. Every scroll event is one wheel step in the direction
    /// of its vertical delta, whatever the delta unit.
    pub fn encode(
        &mut self,
        event: &PointerEvent,
        controller: &mut ViewportTransformController,
    ) -> EventOutcome {
        match event {
            PointerEvent::Down(e) => {
                if !matches!(e.button, None | Some(PointerButton::Primary)) {
                    return EventOutcome::Ignored;
                }
                let transition = self.touches.down(e.pointer.pointer_id, e.state.logical_point());
                dispatch(transition, controller)
            }
            PointerEvent::Move(e) => {
                let transition = self
                    .touches
                    .moved(e.pointer.pointer_id, e.current.logical_point());
                dispatch(transition, controller)
            }
            PointerEvent::Up(e) => {
                if !matches!(e.button, None | Some(PointerButton::Primary)) {
                    return EventOutcome::Ignored;
                }
                let transition = self.touches.up(e.pointer.pointer_id);
                dispatch(transition, controller)
            }
            PointerEvent::Cancel(info) => {
                let transition = self.touches.up(info.pointer_id);
                if transition == TouchTransition::Up {
                    controller.cancel_gestures();
                    return EventOutcome::Tracked;
                }
                dispatch(transition, controller)
            }
            PointerEvent::Scroll(e) => {
                let delta_y = scroll_delta_y(e);
                let delta_y = if self.invert_wheel { -delta_y } else { delta_y };
                controller.on_wheel(e.state.logical_point(), delta_y)
            }
            PointerEvent::Gesture(e) => match &e.gesture {
                PointerGesture::Pinch(delta) => {
                    let factor = 1.0 + f64::from(*delta);
                    trace!("trackpad pinch {delta} at {:?}", e.state.logical_point());
                    controller.zoom_about(e.state.logical_point(), factor)
                }
                _ => EventOutcome::Ignored,
            },
            PointerEvent::Enter(_) | PointerEvent::Leave(_) => EventOutcome::Ignored,
        }
    }

    /// Forgets every tracked pointer and abandons the controller's gestures.
    pub fn reset(&mut self, controller: &mut ViewportTransformController) {
        self.touches.clear();
        controller.cancel_gestures();
    }
}

impl Default for PointerEventAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn scroll_delta_y(event: &PointerScrollEvent) -> f64 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => pos.y,
        ScrollDelta::LineDelta(_, y) | ScrollDelta::PageDelta(_, y) => f64::from(*y),
    }
}

fn dispatch(transition: TouchTransition, controller: &mut ViewportTransformController) -> EventOutcome {
    match transition {
        TouchTransition::Ignored => EventOutcome::Ignored,
        TouchTransition::Down(p) => controller.on_pointer_down(p),
        TouchTransition::Move(p) => controller.on_pointer_move(p),
        TouchTransition::Up => controller.on_pointer_up(),
        TouchTransition::PinchStart(p1, p2) => controller.on_pinch_start(p1, p2),
        TouchTransition::PinchMove(p1, p2) => controller.on_pinch_move(p1, p2),
        TouchTransition::PinchEnd => controller.on_pinch_end(),
    }
}
