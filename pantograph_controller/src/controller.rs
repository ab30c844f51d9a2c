// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use log::{debug, trace};
use pantograph_gesture::click::ClickState;
use pantograph_gesture::drag::DragState;
use pantograph_gesture::pinch::{PinchState, PinchUpdate};
use pantograph_view::ViewTransform;

use crate::config::{ConfigError, ControllerConfig, Features, PinchPivot};
use crate::event::{EventOutcome, InputEvent, PickRequest};

/// Owns a [`ViewTransform`] and updates it from pointer, wheel, and pinch input.
///
/// All positions passed in are logical screen coordinates. They are mapped into
/// the view frame (see [`YAxis`](pantograph_view::YAxis)) on entry, so every
/// piece of pan/zoom math runs in one coordinate system.
///
/// Every update computes a complete new transform and stores it in one
/// assignment; [`current_transform`](Self::current_transform) never sees a
/// half-applied zoom. [`revision`](Self::revision) increases with each committed
/// change so a render loop can skip frames when nothing moved.
#[derive(Clone, Debug)]
pub struct ViewportTransformController {
    config: ControllerConfig,
    transform: ViewTransform,
    drag: DragState,
    pinch: PinchState,
    click: ClickState,
    revision: u64,
}

impl ViewportTransformController {
    /// Creates a controller with the identity transform.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("viewport controller created with {config:?}");
        Ok(Self {
            config,
            transform: ViewTransform::IDENTITY,
            drag: DragState::default(),
            pinch: PinchState::new(config.min_pinch_distance),
            click: ClickState::new(config.click_slop),
            revision: 0,
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Enables or disables interactions at runtime.
    ///
    /// Disabling [`Features::DRAG`] ends a drag in progress and disabling
    /// [`Features::PICKING`] discards a pending click.
    pub fn set_features(&mut self, features: Features) {
        if !features.contains(Features::DRAG) {
            self.drag.end();
        }
        if !features.contains(Features::PICKING) {
            self.click.cancel();
        }
        debug!("features changed from {:?} to {features:?}", self.config.features);
        self.config.features = features;
    }

    /// Snapshot of the current transform.
    #[must_use]
    pub fn current_transform(&self) -> ViewTransform {
        self.transform
    }

    /// Number of committed transform changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` while a pointer press is being tracked as a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while a two-pointer gesture owns the input.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Content point under a screen position.
    #[must_use]
    pub fn screen_to_content(&self, screen: impl Into<Point>) -> Point {
        self.transform.view_to_content(self.to_view(screen.into()))
    }

    /// Screen position of a content point.
    #[must_use]
    pub fn content_to_screen(&self, content: impl Into<Point>) -> Point {
        let view = self.transform.content_to_view(content.into());
        self.config.y_axis.view_to_screen(view)
    }

    /// Dispatches an [`InputEvent`] to the matching `on_*` method.
    pub fn handle(&mut self, event: &InputEvent) -> EventOutcome {
        match *event {
            InputEvent::PointerDown { position } => self.on_pointer_down(position),
            InputEvent::PointerMove { position } => self.on_pointer_move(position),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::Wheel { position, delta_y } => self.on_wheel(position, delta_y),
            InputEvent::PinchStart { p1, p2 } => self.on_pinch_start(p1, p2),
            InputEvent::PinchMove { p1, p2 } => self.on_pinch_move(p1, p2),
            InputEvent::PinchEnd => self.on_pinch_end(),
        }
    }

    /// Primary pointer pressed at `position`.
    ///
    /// Records the drag anchor and arms click recognition. While a pinch is
    /// active the press is remembered but stays suspended until the pinch ends.
    pub fn on_pointer_down(&mut self, position: impl Into<Point>) -> EventOutcome {
        let screen = position.into();
        let features = self.config.features;
        if !features.intersects(Features::DRAG | Features::PICKING) {
            return EventOutcome::Ignored;
        }
        if features.contains(Features::DRAG) {
            self.drag.start(self.to_view(screen));
            if self.pinch.is_active() {
                self.drag.suspend();
            }
        }
        if features.contains(Features::PICKING) && !self.pinch.is_active() {
            self.click.press(screen);
        }
        debug!("pointer down at {screen:?}");
        EventOutcome::Tracked
    }

    /// Primary pointer moved to `position`.
    ///
    /// While dragging, the offset moves by the pointer delta in the view frame:
    /// `(dx, dy)` for [`YAxis::Down`](pantograph_view::YAxis::Down) and
    /// `(dx, -dy)` for [`YAxis::Up`](pantograph_view::YAxis::Up), independent of
    /// the current scale. Moves during a pinch are not accumulated.
    pub fn on_pointer_move(&mut self, position: impl Into<Point>) -> EventOutcome {
        let screen = position.into();
        self.click.moved(screen);
        if !self.drag.is_dragging() || self.pinch.is_active() {
            return EventOutcome::Ignored;
        }
        match self.drag.update(self.to_view(screen)) {
            None => {
                trace!("drag re-anchored at {screen:?}");
                EventOutcome::Tracked
            }
            Some(delta) => self.pan_by(delta),
        }
    }

    /// Primary pointer released.
    ///
    /// Ends the drag. If picking is enabled and the pointer stayed within the
    /// click slop since it went down, returns the click as a [`PickRequest`].
    pub fn on_pointer_up(&mut self) -> EventOutcome {
        let was_dragging = self.drag.is_dragging();
        self.drag.end();
        if let Some(screen) = self.click.release() {
            let pick = PickRequest {
                screen,
                content: self.screen_to_content(screen),
            };
            debug!("pick at screen {:?}, content {:?}", pick.screen, pick.content);
            return EventOutcome::Pick(pick);
        }
        if was_dragging {
            debug!("drag ended");
            EventOutcome::Tracked
        } else {
            EventOutcome::Ignored
        }
    }

    /// Wheel step at `position`.
    ///
    /// Negative `delta_y` zooms in by the configured wheel step, positive
    /// zooms out by its inverse, and zero does nothing. Only the sign of
    /// `delta_y` matters.
    pub fn on_wheel(&mut self, position: impl Into<Point>, delta_y: f64) -> EventOutcome {
        if !self.config.features.contains(Features::WHEEL_ZOOM) {
            return EventOutcome::Ignored;
        }
        if delta_y == 0.0 || !delta_y.is_finite() {
            return EventOutcome::Ignored;
        }
        let factor = if delta_y < 0.0 {
            self.config.wheel_step
        } else {
            self.config.wheel_step.recip()
        };
        self.zoom_about(position, factor)
    }

    /// Multiplies the scale by `factor` while the content under `position`
    /// stays under it.
    ///
    /// This is the zoom-to-pointer primitive behind wheel and pinch handling,
    /// exposed for other zoom sources such as trackpad magnify gestures or
    /// keyboard shortcuts. Non-positive or non-finite factors are ignored, and
    /// the resulting scale is clamped into the configured limits.
    pub fn zoom_about(&mut self, position: impl Into<Point>, factor: f64) -> EventOutcome {
        let anchor = self.to_view(position.into());
        match self
            .transform
            .zoomed_about(anchor, factor, &self.config.scale_limits)
        {
            Some(next) => self.commit(next),
            None => EventOutcome::Ignored,
        }
    }

    /// A two-pointer gesture began with pointers at `p1` and `p2`.
    ///
    /// Suspends any drag in progress and discards a pending click.
    pub fn on_pinch_start(&mut self, p1: impl Into<Point>, p2: impl Into<Point>) -> EventOutcome {
        let (p1, p2) = (self.to_view(p1.into()), self.to_view(p2.into()));
        self.yield_to_pinch();
        self.pinch.start(p1, p2);
        debug!("pinch started at {p1:?}, {p2:?}");
        EventOutcome::Tracked
    }

    /// The pinch pointers moved to `p1` and `p2`.
    ///
    /// Scales by the ratio of the new pointer distance to the previous one
    /// about the pinch pivot, then pans by the movement of the pinch center.
    /// Both parts are committed as a single transform. A move without a live
    /// baseline (after [`on_pinch_end`](Self::on_pinch_end), or with no start at
    /// all) only establishes the baseline. Coincident pointers are skipped.
    pub fn on_pinch_move(&mut self, p1: impl Into<Point>, p2: impl Into<Point>) -> EventOutcome {
        let (p1, p2) = (self.to_view(p1.into()), self.to_view(p2.into()));
        if !self.pinch.is_active() {
            self.yield_to_pinch();
        }
        let step = match self.pinch.update(p1, p2) {
            PinchUpdate::Anchored => {
                debug!("pinch anchored at {p1:?}, {p2:?}");
                return EventOutcome::Tracked;
            }
            PinchUpdate::Degenerate => {
                trace!("skipping degenerate pinch at {p1:?}, {p2:?}");
                return EventOutcome::Ignored;
            }
            PinchUpdate::Moved(step) => step,
        };
        if !self.config.features.contains(Features::PINCH_ZOOM) {
            return EventOutcome::Tracked;
        }

        let pivot = match self.config.pinch_pivot {
            PinchPivot::NewCenter => step.center,
            PinchPivot::PreviousCenter => step.previous_center,
        };
        let zoomed = self
            .transform
            .zoomed_about(pivot, step.factor, &self.config.scale_limits)
            .unwrap_or(self.transform);
        let next = zoomed.translated(step.pan()).unwrap_or(zoomed);
        if next == self.transform {
            return EventOutcome::Tracked;
        }
        self.commit(next)
    }

    /// The two-pointer gesture ended.
    ///
    /// Drops the pinch baseline so the next pinch re-anchors. A drag that was
    /// suspended by the pinch stays pressed and re-anchors on its next move.
    pub fn on_pinch_end(&mut self) -> EventOutcome {
        if !self.pinch.is_active() {
            return EventOutcome::Ignored;
        }
        self.pinch.end();
        debug!("pinch ended");
        EventOutcome::Tracked
    }

    /// Abandons every gesture in progress without touching the transform.
    ///
    /// Use this when the host loses pointer capture or focus.
    pub fn cancel_gestures(&mut self) {
        self.drag.end();
        self.pinch.end();
        self.click.cancel();
        debug!("gestures cancelled");
    }

    /// Replaces the transform.
    pub fn set_transform(&mut self, transform: ViewTransform) -> EventOutcome {
        if transform == self.transform {
            return EventOutcome::Ignored;
        }
        self.commit(transform)
    }

    /// Returns to the identity transform.
    pub fn reset(&mut self) -> EventOutcome {
        self.set_transform(ViewTransform::IDENTITY)
    }

    /// Fits `content` inside the screen rectangle `view_rect` using the
    /// configured [`FitMode`](pantograph_view::FitMode).
    ///
    /// Empty rectangles leave the transform unchanged.
    pub fn fit_rect(&mut self, view_rect: Rect, content: Rect) -> EventOutcome {
        let frame = Rect::from_points(
            self.to_view(view_rect.origin()),
            self.to_view(Point::new(view_rect.x1, view_rect.y1)),
        );
        match ViewTransform::fit_rect(
            frame,
            content,
            self.config.fit_mode,
            &self.config.scale_limits,
        ) {
            Some(next) => self.set_transform(next),
            None => EventOutcome::Ignored,
        }
    }

    fn pan_by(&mut self, delta: Vec2) -> EventOutcome {
        if delta == Vec2::ZERO {
            return EventOutcome::Tracked;
        }
        match self.transform.translated(delta) {
            Some(next) => self.commit(next),
            None => EventOutcome::Ignored,
        }
    }

    fn yield_to_pinch(&mut self) {
        if self.drag.is_dragging() {
            trace!("drag suspended by pinch");
        }
        self.drag.suspend();
        self.click.cancel();
    }

    fn commit(&mut self, next: ViewTransform) -> EventOutcome {
        self.transform = next;
        self.revision += 1;
        trace!(
            "transform r{}: offset ({}, {}), scale {}",
            self.revision,
            next.offset_x(),
            next.offset_y(),
            next.scale()
        );
        EventOutcome::Transformed
    }

    fn to_view(&self, screen: Point) -> Point {
        self.config.y_axis.screen_to_view(screen)
    }
}

impl Default for ViewportTransformController {
    fn default() -> Self {
        Self {
            config: ControllerConfig::default(),
            transform: ViewTransform::IDENTITY,
            drag: DragState::default(),
            pinch: PinchState::default(),
            click: ClickState::default(),
            revision: 0,
        }
    }
}
