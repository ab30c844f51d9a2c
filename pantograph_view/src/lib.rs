// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pantograph View: the pan/zoom view transform of a 2D canvas.
//!
//! This crate provides a small, headless model of how content (an image plane,
//! overlays, anything laid out in content coordinates) is placed on screen.
//! It focuses on:
//! - The view transform itself: a translation plus a uniform scale.
//! - Coordinate conversion between content space and the view frame.
//! - Zoom-to-pointer: rescaling while the content under a point stays put.
//! - Fitting content into a view rectangle.
//! - Scale limits and the orientation of the view frame.
//!
//! It does **not** interpret input events or own any rendering backend.
//! Gesture handling lives in `pantograph_controller`, which drives a
//! [`ViewTransform`] from pointer, wheel, and pinch input.
//!
//! ## Zoom-to-pointer
//!
//! ```rust
//! use kurbo::Point;
//! use pantograph_view::{ScaleLimits, ViewTransform};
//!
//! let limits = ScaleLimits::default();
//! let view = ViewTransform::IDENTITY;
//!
//! let pointer = Point::new(100.0, 100.0);
//! let under_pointer = view.view_to_content(pointer);
//!
//! let zoomed = view.zoomed_about(pointer, 1.1, &limits).unwrap();
//! assert!((zoomed.scale() - 1.1).abs() < 1e-12);
//!
//! // The same content point is still under the pointer.
//! let back = zoomed.content_to_view(under_pointer);
//! assert!((back.x - pointer.x).abs() < 1e-9);
//! assert!((back.y - pointer.y).abs() < 1e-9);
//! ```
//!
//! ## Fitting content
//!
//! ```rust
//! use kurbo::Rect;
//! use pantograph_view::{FitMode, ScaleLimits, ViewTransform};
//!
//! let view_rect = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let image = Rect::new(0.0, 0.0, 1600.0, 900.0);
//!
//! let home = ViewTransform::fit_rect(view_rect, image, FitMode::Center, &ScaleLimits::default())
//!     .unwrap();
//! assert_eq!(home.scale(), 0.5);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is always uniform and the transform is axis-aligned; there is no
//!   rotation.
//! - The view frame is either the screen frame or the screen frame with `y`
//!   flipped, see [`YAxis`]. Callers convert input points once and keep all
//!   math in that frame.
//!
//! This crate is `no_std`.

#![no_std]

mod limits;
mod modes;
mod transform;

pub use limits::{ScaleLimits, ScaleLimitsError};
pub use modes::{FitMode, YAxis};
pub use transform::ViewTransform;
