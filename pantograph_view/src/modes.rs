// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Orientation of the view frame relative to screen coordinates.
///
/// Input coordinates arrive as logical screen pixels with `y` growing
/// downwards. Every point is mapped into the view frame once, on the way in,
/// and all pan/zoom math then happens in that frame. Dragging and pinching
/// therefore always agree on which way "up" is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum YAxis {
    /// The view frame is the screen frame: `y` grows downwards.
    ///
    /// A drag by `(dx, dy)` moves the offset by `(dx, dy)`.
    #[default]
    Down,
    /// The view frame has `y` growing upwards, like an orthographic camera
    /// centered on a y-up scene.
    ///
    /// A drag by `(dx, dy)` on screen moves the offset by `(dx, -dy)`.
    Up,
}

impl YAxis {
    /// Sign applied to screen-space `y` when entering the view frame.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Down => 1.0,
            Self::Up => -1.0,
        }
    }

    /// Maps a screen-space point into the view frame.
    #[must_use]
    pub fn screen_to_view(self, pt: Point) -> Point {
        Point::new(pt.x, pt.y * self.sign())
    }

    /// Maps a view-frame point back into screen space.
    ///
    /// The mapping is an involution, so this is the same flip as
    /// [`YAxis::screen_to_view`].
    #[must_use]
    pub fn view_to_screen(self, pt: Point) -> Point {
        self.screen_to_view(pt)
    }

    /// Maps a screen-space movement into the view frame.
    #[must_use]
    pub fn screen_delta_to_view(self, delta: Vec2) -> Vec2 {
        Vec2::new(delta.x, delta.y * self.sign())
    }
}

/// How fitted content should be positioned inside the view.
///
/// Consulted by [`crate::ViewTransform::fit_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FitMode {
    /// Center the fitted content within the view rect.
    #[default]
    Center,
    /// Align the minimum corner of the fitted content with the view rect origin.
    AlignMin,
}
