// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pantograph Gesture: small state machines for canvas pan/zoom input.
//!
//! Each module tracks exactly the state one interaction needs across events:
//!
//! - [`drag`]: movement deltas of one pressed pointer, with suspension while a
//!   pinch owns the input.
//! - [`pinch`]: scale factor and center movement of a two-pointer gesture,
//!   re-anchored after every gap.
//! - [`click`]: press/release recognition within a movement tolerance.
//! - [`touches`]: multi-pointer bookkeeping that turns per-pointer events into
//!   single-pointer and pinch transitions.
//!
//! None of them know about view transforms. They consume positions and produce
//! deltas, factors, or transitions; `pantograph_controller` turns those into
//! view updates.
//!
//! ## Drag and pinch together
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use pantograph_gesture::drag::DragState;
//! use pantograph_gesture::pinch::{PinchState, PinchUpdate};
//!
//! let mut drag = DragState::default();
//! let mut pinch = PinchState::default();
//!
//! drag.start(Point::new(0.0, 0.0));
//! assert_eq!(drag.update(Point::new(5.0, 0.0)), Some(Vec2::new(5.0, 0.0)));
//!
//! // A second finger lands: the drag yields to the pinch.
//! drag.suspend();
//! pinch.start(Point::new(5.0, 0.0), Point::new(15.0, 0.0));
//! assert!(matches!(
//!     pinch.update(Point::new(5.0, 0.0), Point::new(25.0, 0.0)),
//!     PinchUpdate::Moved(_)
//! ));
//!
//! // Second finger lifts; the first move afterwards only re-anchors the drag.
//! pinch.end();
//! assert_eq!(drag.update(Point::new(6.0, 0.0)), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod click;
pub mod drag;
pub mod pinch;
pub mod touches;
