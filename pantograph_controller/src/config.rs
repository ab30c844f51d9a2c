// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use pantograph_gesture::{click, pinch};
use pantograph_view::{FitMode, ScaleLimits, ScaleLimitsError, YAxis};

bitflags::bitflags! {
    /// Interactions the controller responds to.
    ///
    /// A disabled interaction turns its events into
    /// [`EventOutcome::Ignored`](crate::EventOutcome::Ignored). Two-pointer
    /// gestures still suspend dragging when [`Features::PINCH_ZOOM`] is off;
    /// they just do not zoom.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Features: u8 {
        /// Single-pointer drag pans the view.
        const DRAG       = 0b0000_0001;
        /// Mouse wheel zooms about the cursor.
        const WHEEL_ZOOM = 0b0000_0010;
        /// Two-pointer pinch zooms about the pinch center and pans with it.
        const PINCH_ZOOM = 0b0000_0100;
        /// Press/release without movement produces a pick request.
        const PICKING    = 0b0000_1000;
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::all()
    }
}

/// Point a pinch step scales about before the pinch translation is added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PinchPivot {
    /// Scale about the current pinch center, then translate by the center
    /// movement.
    #[default]
    NewCenter,
    /// Scale about the previous pinch center, then translate by the center
    /// movement. The content that was under the fingers follows them exactly.
    PreviousCenter,
}

/// Tunables for [`ViewportTransformController`](crate::ViewportTransformController).
///
/// Construct with [`ControllerConfig::default`] and adjust with the `with_*`
/// methods. [`ControllerConfig::validate`] is run by the controller
/// constructor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Enabled interactions.
    pub features: Features,
    /// Scale multiplier per wheel notch. Must be finite and greater than one.
    pub wheel_step: f64,
    /// Range the scale is clamped into.
    pub scale_limits: ScaleLimits,
    /// Orientation of the view frame.
    pub y_axis: YAxis,
    /// Pivot used by pinch steps.
    pub pinch_pivot: PinchPivot,
    /// Pointer distance below which a pinch update is skipped. Must be positive.
    pub min_pinch_distance: f64,
    /// Movement tolerance for click recognition, in logical pixels.
    pub click_slop: f64,
    /// Placement used by [`fit_rect`](crate::ViewportTransformController::fit_rect).
    pub fit_mode: FitMode,
}

impl ControllerConfig {
    /// Default scale multiplier per wheel notch.
    pub const DEFAULT_WHEEL_STEP: f64 = 1.1;

    /// Sets the enabled interactions.
    #[must_use]
    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// Sets the wheel step.
    #[must_use]
    pub fn with_wheel_step(mut self, step: f64) -> Self {
        self.wheel_step = step;
        self
    }

    /// Sets the scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, limits: ScaleLimits) -> Self {
        self.scale_limits = limits;
        self
    }

    /// Sets the view frame orientation.
    #[must_use]
    pub fn with_y_axis(mut self, y_axis: YAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    /// Sets the pinch pivot.
    #[must_use]
    pub fn with_pinch_pivot(mut self, pivot: PinchPivot) -> Self {
        self.pinch_pivot = pivot;
        self
    }

    /// Sets the degenerate pinch distance.
    #[must_use]
    pub fn with_min_pinch_distance(mut self, distance: f64) -> Self {
        self.min_pinch_distance = distance;
        self
    }

    /// Sets the click tolerance.
    #[must_use]
    pub fn with_click_slop(mut self, slop: f64) -> Self {
        self.click_slop = slop;
        self
    }

    /// Sets the fit mode.
    #[must_use]
    pub fn with_fit_mode(mut self, mode: FitMode) -> Self {
        self.fit_mode = mode;
        self
    }

    /// Checks every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.wheel_step.is_finite() && self.wheel_step > 1.0) {
            return Err(ConfigError::InvalidWheelStep {
                value: self.wheel_step,
            });
        }
        self.scale_limits
            .validate()
            .map_err(ConfigError::InvalidScaleLimits)?;
        if !(self.min_pinch_distance.is_finite() && self.min_pinch_distance > 0.0) {
            return Err(ConfigError::InvalidPinchDistance {
                value: self.min_pinch_distance,
            });
        }
        if !(self.click_slop.is_finite() && self.click_slop >= 0.0) {
            return Err(ConfigError::InvalidClickSlop {
                value: self.click_slop,
            });
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            features: Features::default(),
            wheel_step: Self::DEFAULT_WHEEL_STEP,
            scale_limits: ScaleLimits::default(),
            y_axis: YAxis::default(),
            pinch_pivot: PinchPivot::default(),
            min_pinch_distance: pinch::DEFAULT_MIN_DISTANCE,
            click_slop: click::DEFAULT_SLOP,
            fit_mode: FitMode::default(),
        }
    }
}

/// Reason a [`ControllerConfig`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The wheel step was not a finite value greater than one.
    InvalidWheelStep {
        /// The rejected step.
        value: f64,
    },
    /// The scale limits were malformed.
    InvalidScaleLimits(ScaleLimitsError),
    /// The degenerate pinch distance was not finite and positive.
    InvalidPinchDistance {
        /// The rejected distance.
        value: f64,
    },
    /// The click slop was negative or not finite.
    InvalidClickSlop {
        /// The rejected slop.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWheelStep { value } => {
                write!(f, "wheel step {value} must be finite and greater than 1")
            }
            Self::InvalidScaleLimits(err) => write!(f, "invalid scale limits: {err}"),
            Self::InvalidPinchDistance { value } => {
                write!(f, "minimum pinch distance {value} must be finite and positive")
            }
            Self::InvalidClickSlop { value } => {
                write!(f, "click slop {value} must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidScaleLimits(err) => Some(err),
            _ => None,
        }
    }
}
