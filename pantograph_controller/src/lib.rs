// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pantograph Controller: interactive pan and zoom for a 2D canvas.
//!
//! [`ViewportTransformController`] owns a [`ViewTransform`] (a uniform scale
//! followed by a translation) and updates it from user input:
//!
//! - Dragging the primary pointer pans the view by the pointer delta.
//! - The wheel zooms in or out by a fixed step while the content under the
//!   cursor stays under the cursor.
//! - A two-pointer pinch zooms by the ratio of pointer distances about the pinch
//!   center and pans with the center's movement.
//! - A press and release without movement becomes a [`PickRequest`] carrying
//!   the content point under the pointer.
//!
//! The controller draws nothing. A renderer reads
//! [`current_transform`](ViewportTransformController::current_transform) once
//! per frame and applies it, typically via
//! [`ViewTransform::to_affine`]; [`revision`](ViewportTransformController::revision)
//! tells it whether anything changed.
//!
//! ## Zoom to pointer
//!
//! ```rust
//! use kurbo::Point;
//! use pantograph_controller::ViewportTransformController;
//!
//! let mut controller = ViewportTransformController::default();
//! let cursor = Point::new(100.0, 100.0);
//! let under_cursor = controller.screen_to_content(cursor);
//!
//! // One notch towards the user zooms in by the default step of 1.1.
//! assert!(controller.on_wheel(cursor, -1.0).is_transformed());
//!
//! let t = controller.current_transform();
//! assert!((t.scale() - 1.1).abs() < 1e-12);
//! assert!((controller.content_to_screen(under_cursor) - cursor).hypot() < 1e-9);
//! ```
//!
//! ## Configuration
//!
//! [`ControllerConfig`] selects the enabled interactions, wheel step, scale
//! limits, and the orientation of the view frame. With [`YAxis::Up`], screen
//! input is mirrored vertically before any pan/zoom math, so dragging the
//! pointer up moves the content up in a `y`-up scene:
//!
//! ```rust
//! use pantograph_controller::{ControllerConfig, Features, ViewportTransformController};
//! use pantograph_view::YAxis;
//!
//! let config = ControllerConfig::default()
//!     .with_features(Features::DRAG | Features::WHEEL_ZOOM)
//!     .with_y_axis(YAxis::Up);
//! let mut controller = ViewportTransformController::new(config).unwrap();
//!
//! controller.on_pointer_down((0.0, 0.0));
//! controller.on_pointer_move((50.0, -20.0));
//! controller.on_pointer_up();
//!
//! let offset = controller.current_transform().offset();
//! assert_eq!((offset.x, offset.y), (50.0, 20.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//! - `serde`: serialize configuration, [`InputEvent`]s, and [`PickRequest`]s.
//! - `ui_events_adapter` (default): [`PointerEventAdapter`] for
//!   [`ui_events`](https://docs.rs/ui-events) pointer streams.
//!
//! Diagnostics go through the [`log`] facade: gesture lifecycle at `debug`,
//! every committed transform at `trace`.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "ui_events_adapter")]
mod adapter;
mod config;
mod controller;
mod event;

#[cfg(feature = "ui_events_adapter")]
pub use adapter::PointerEventAdapter;
pub use config::{ConfigError, ControllerConfig, Features, PinchPivot};
pub use controller::ViewportTransformController;
pub use event::{EventOutcome, InputEvent, PickRequest};
pub use pantograph_view::{FitMode, ScaleLimits, ScaleLimitsError, ViewTransform, YAxis};
