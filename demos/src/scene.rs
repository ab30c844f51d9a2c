// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A procedural overlay scene to resolve picks against.

use std::f64::consts::TAU;

use kurbo::{BezPath, Point, Rect, Shape, Vec2};
use serde::Serialize;

/// One pickable overlay: a convex regular polygon in content space.
#[derive(Clone, Debug)]
pub(crate) struct Overlay {
    pub(crate) id: usize,
    pub(crate) sides: usize,
    pub(crate) center: Point,
    pub(crate) path: BezPath,
}

/// What a pick resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub(crate) struct Hit {
    pub(crate) id: usize,
    pub(crate) sides: usize,
}

/// Overlays in paint order; later overlays sit on top.
#[derive(Clone, Debug, Default)]
pub(crate) struct Scene {
    overlays: Vec<Overlay>,
}

impl Scene {
    /// Lays `count` polygons out on a grid over `content`.
    ///
    /// Every other overlay is nudged towards its left neighbour so that some
    /// pairs overlap and stacking order matters for picks.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "grid dimensions are small positive integers"
    )]
    pub(crate) fn generate(content: Rect, count: usize) -> Self {
        if count == 0 || content.is_zero_area() {
            return Self::default();
        }
        let columns = (count as f64).sqrt().ceil().max(1.0) as usize;
        let rows = count.div_ceil(columns);
        let cell_w = content.width() / columns as f64;
        let cell_h = content.height() / rows as f64;
        let radius = 0.4 * cell_w.min(cell_h);

        let overlays = (0..count)
            .map(|id| {
                let (row, col) = (id / columns, id % columns);
                let nudge = if id % 2 == 1 { -0.45 * cell_w } else { 0.0 };
                let center = Point::new(
                    content.x0 + (col as f64 + 0.5) * cell_w + nudge,
                    content.y0 + (row as f64 + 0.5) * cell_h,
                );
                let sides = 3 + id % 6;
                Overlay {
                    id,
                    sides,
                    center,
                    path: regular_polygon(center, radius, sides, id as f64 * 0.3),
                }
            })
            .collect();
        Self { overlays }
    }

    pub(crate) fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Topmost overlay containing `content`.
    pub(crate) fn pick(&self, content: Point) -> Option<Hit> {
        self.overlays
            .iter()
            .rev()
            .find(|overlay| overlay.path.contains(content))
            .map(|overlay| Hit {
                id: overlay.id,
                sides: overlay.sides,
            })
    }
}

fn regular_polygon(center: Point, radius: f64, sides: usize, rotation: f64) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..sides {
        let angle = rotation + TAU * i as f64 / sides as f64;
        let vertex = center + radius * Vec2::from_angle(angle);
        if i == 0 {
            path.move_to(vertex);
        } else {
            path.line_to(vertex);
        }
    }
    path.close_path();
    path
}
