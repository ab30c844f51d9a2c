// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Inclusive range a view scale is clamped into.
///
/// Both bounds are finite and strictly positive, with `min <= max`.
///
/// Deserialized ranges are checked with [`ScaleLimits::validate`]; swapped or
/// non-positive bounds fail to load.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawScaleLimits"))]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Limits wide enough to never clamp a sane scale: `[1e-3, 1e3]`.
    pub const DEFAULT: Self = Self {
        min: 1e-3,
        max: 1e3,
    };

    /// Creates a new range.
    ///
    /// Swapped bounds are normalized so that `min <= max`. Bounds that are not
    /// finite and positive are rejected.
    pub fn new(min: f64, max: f64) -> Result<Self, ScaleLimitsError> {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let limits = Self { min, max };
        limits.validate()?;
        Ok(limits)
    }

    /// Checks the invariants of a range built without [`ScaleLimits::new`],
    /// for example one that was deserialized.
    pub fn validate(&self) -> Result<(), ScaleLimitsError> {
        if !(self.min.is_finite() && self.min > 0.0) {
            return Err(ScaleLimitsError::NonPositive { value: self.min });
        }
        if !(self.max.is_finite() && self.max > 0.0) {
            return Err(ScaleLimitsError::NonPositive { value: self.max });
        }
        if self.min > self.max {
            return Err(ScaleLimitsError::Inverted {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into this range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside this range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScaleLimits {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScaleLimits> for ScaleLimits {
    type Error = ScaleLimitsError;

    fn try_from(raw: RawScaleLimits) -> Result<Self, Self::Error> {
        let limits = Self {
            min: raw.min,
            max: raw.max,
        };
        limits.validate()?;
        Ok(limits)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reason a [`ScaleLimits`] range was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleLimitsError {
    /// A bound was zero, negative, infinite or NaN.
    NonPositive {
        /// The offending bound.
        value: f64,
    },
    /// `min` was larger than `max`.
    Inverted {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

impl fmt::Display for ScaleLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { value } => {
                write!(f, "scale limit {value} must be finite and positive")
            }
            Self::Inverted { min, max } => {
                write!(f, "minimum scale {min} is larger than maximum scale {max}")
            }
        }
    }
}

impl core::error::Error for ScaleLimitsError {}
