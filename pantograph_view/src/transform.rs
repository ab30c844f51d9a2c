// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::limits::ScaleLimits;
use crate::modes::FitMode;

/// Uniform pan + zoom mapping from content space into the view frame.
///
/// A content point `c` appears at `c * scale + offset`. The scale is always
/// finite and strictly positive; every constructor and update enforces this,
/// so the inverse mapping is always defined.
///
/// `ViewTransform` is a small `Copy` value. Updates build a new value and
/// replace the old one wholesale, so a reader can never observe a new scale
/// paired with a stale offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewTransform {
    offset: Vec2,
    scale: f64,
}

impl ViewTransform {
    /// Offset zero, scale one.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform, returning `None` if `scale` is not finite and
    /// positive or `offset` is not finite.
    #[must_use]
    pub fn new(offset: Vec2, scale: f64) -> Option<Self> {
        if !(scale.is_finite() && scale > 0.0) || !offset.is_finite() {
            return None;
        }
        Some(Self { offset, scale })
    }

    /// Translation applied after scaling, in view-frame units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Horizontal component of [`ViewTransform::offset`].
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset.x
    }

    /// Vertical component of [`ViewTransform::offset`].
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset.y
    }

    /// Uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a content-space point into the view frame.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Maps a view-frame point into content space.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Maps a content-space rectangle into the view frame.
    #[must_use]
    pub fn content_to_view_rect(&self, rect: Rect) -> Rect {
        // Uniform positive scale keeps the rect axis-aligned, two corners suffice.
        Rect::from_points(
            self.content_to_view(rect.origin()),
            self.content_to_view(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Maps a view-frame rectangle into content space.
    #[must_use]
    pub fn view_to_content_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.view_to_content(rect.origin()),
            self.view_to_content(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Content-space region visible through `view_rect`.
    ///
    /// Renderers can use this to cull overlays that fall outside the view.
    #[must_use]
    pub fn visible_content_rect(&self, view_rect: Rect) -> Rect {
        self.view_to_content_rect(view_rect)
    }

    /// Affine form of this transform, for handing to a renderer.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Returns this transform translated by `delta` view-frame units.
    ///
    /// Returns `None` if the result would not be finite.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Option<Self> {
        Self::new(self.offset + delta, self.scale)
    }

    /// Returns this transform rescaled to `new_scale` while keeping the content
    /// point under `anchor` fixed in the view frame.
    ///
    /// The content point under the anchor is computed with the *current*
    /// scale, `c = (anchor - offset) / scale`, and the new offset is chosen so
    /// that `c` maps back onto the anchor: `offset' = anchor - c * new_scale`.
    /// Offset and scale are produced together as one value.
    ///
    /// Returns `None` if `new_scale` is not finite and positive.
    #[must_use]
    pub fn rescaled_about(&self, anchor: Point, new_scale: f64) -> Option<Self> {
        let anchor = anchor.to_vec2();
        let content = (anchor - self.offset) / self.scale;
        Self::new(anchor - content * new_scale, new_scale)
    }

    /// Multiplies the scale by `factor` around `anchor`, clamping the result
    /// into `limits`.
    ///
    /// Returns `None` when nothing would change: the factor is not finite and
    /// positive, or clamping leaves the scale where it was.
    #[must_use]
    pub fn zoomed_about(&self, anchor: Point, factor: f64, limits: &ScaleLimits) -> Option<Self> {
        if !(factor.is_finite() && factor > 0.0) {
            return None;
        }
        let new_scale = limits.clamp(self.scale * factor);
        if (new_scale - self.scale).abs() < f64::EPSILON * self.scale {
            return None;
        }
        self.rescaled_about(anchor, new_scale)
    }

    /// Computes the transform that fits `content` inside `view_rect`,
    /// preserving aspect ratio.
    ///
    /// Returns `None` if either rectangle is empty.
    #[must_use]
    pub fn fit_rect(
        view_rect: Rect,
        content: Rect,
        mode: FitMode,
        limits: &ScaleLimits,
    ) -> Option<Self> {
        if content.width() <= 0.0 || content.height() <= 0.0 {
            return None;
        }
        if view_rect.width() <= 0.0 || view_rect.height() <= 0.0 {
            return None;
        }

        let sx = view_rect.width() / content.width();
        let sy = view_rect.height() / content.height();
        let scale = limits.clamp(sx.min(sy));

        let offset = match mode {
            FitMode::Center => view_rect.center().to_vec2() - content.center().to_vec2() * scale,
            FitMode::AlignMin => view_rect.origin().to_vec2() - content.origin().to_vec2() * scale,
        };
        Self::new(offset, scale)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
