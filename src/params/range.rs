//! Different ranges for numeric parameters.

use serde::Serialize;

/// A distribution for a floating point parameter's range. All range endpoints are inclusive. Use
/// the associated constructor functions instead of building the variants directly, since those
/// handle the degenerate cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FloatRange {
    /// The values are uniformly distributed between `min` and `max`.
    Linear { min: f32, max: f32 },
    /// Uniformly distributed, but plain values are snapped to `min + k * step`.
    Stepped { min: f32, max: f32, step: f32 },
    /// A rational curve that warps the range. `bias` lies in `[-1, 1]`. Positive values give more
    /// of the normalized range to the end of the range, negative values give more of it to the
    /// start. Use [`FloatRange::with_centre()`] to pick the bias by the value that should sit at
    /// the middle of the control.
    Biased { min: f32, max: f32, bias: f32 },
}

impl FloatRange {
    /// A uniformly distributed range between `start` and `end`.
    pub const fn linear(start: f32, end: f32) -> Self {
        FloatRange::Linear {
            min: start,
            max: end,
        }
    }

    /// A uniformly distributed range that snaps values to multiples of `step` from `start`.
    pub const fn stepped(start: f32, end: f32, step: f32) -> Self {
        FloatRange::Stepped {
            min: start,
            max: end,
            step,
        }
    }

    /// A binary on/off range, `stepped(0, 1, 1)`.
    pub const fn toggle() -> Self {
        Self::stepped(0.0, 1.0, 1.0)
    }

    /// A range warped by `bias`. A bias of zero results in a plain linear range.
    pub fn biased(start: f32, end: f32, bias: f32) -> Self {
        if bias != 0.0 {
            FloatRange::Biased {
                min: start,
                max: end,
                bias,
            }
        } else {
            Self::linear(start, end)
        }
    }

    /// A biased range where a normalized value of 0.5 corresponds to `centre`. Useful for frequency
    /// parameters where the perceptual middle of the range is far away from the arithmetic mean.
    pub fn with_centre(start: f32, end: f32, centre: f32) -> Self {
        let proportion = (centre - start) / (end - start);

        Self::biased(start, end, 2.0 * proportion - 1.0)
    }

    /// The range's minimum value.
    pub fn min(&self) -> f32 {
        match self {
            FloatRange::Linear { min, .. }
            | FloatRange::Stepped { min, .. }
            | FloatRange::Biased { min, .. } => *min,
        }
    }

    /// The range's maximum value.
    pub fn max(&self) -> f32 {
        match self {
            FloatRange::Linear { max, .. }
            | FloatRange::Stepped { max, .. }
            | FloatRange::Biased { max, .. } => *max,
        }
    }

    /// Normalize a plain, unnormalized value. The plain value is clamped to the range first, and the
    /// result is always in `[0, 1]`. NaN normalizes to `0.0`.
    pub fn normalize(&self, plain: f32) -> f32 {
        if plain.is_nan() {
            return 0.0;
        }

        match self {
            FloatRange::Linear { min, max } | FloatRange::Stepped { min, max, .. } => {
                (plain.clamp(*min, *max) - min) / (max - min)
            }
            FloatRange::Biased { min, max, bias } => {
                let plain = plain.clamp(*min, *max);
                let (a, range) = biased_coefficients(*min, *max, *bias);

                let denominator = (2.0 * a * min) + (range * a) - (2.0 * a * plain) - min + plain;
                if denominator == 0.0 {
                    return 0.0;
                }

                ((1.0 - a) * (plain - min) / denominator).min(1.0)
            }
        }
        .clamp(0.0, 1.0)
    }

    /// Unnormalize a normalized value. The normalized value is clamped to `[0, 1]` first, and the
    /// result is always within the range's bounds. NaN is treated as `0.0` and yields the minimum.
    pub fn unnormalize(&self, normalized: f32) -> f32 {
        // `clamp()` lets NaN through
        let normalized = if normalized.is_nan() {
            0.0
        } else {
            normalized.clamp(0.0, 1.0)
        };
        match self {
            FloatRange::Linear { min, max } => (normalized * (max - min)) + min,
            FloatRange::Stepped { min, max, step } => {
                self.snap_to_step((normalized * (max - min)) + min, *step)
            }
            FloatRange::Biased { min, max, bias } => {
                let (a, range) = biased_coefficients(*min, *max, *bias);

                let denominator = (1.0 - a) - normalized + (2.0 * a * normalized);
                if denominator == 0.0 {
                    return *min;
                }

                min + (range * a * normalized / denominator)
            }
        }
        .clamp(self.min(), self.max())
    }

    /// Snap a value to a step size counted from the range's minimum, clamping to the minimum and
    /// maximum value of the range.
    pub fn snap_to_step(&self, value: f32, step_size: f32) -> f32 {
        let (min, max) = (self.min(), self.max());

        (min + ((value - min) / step_size).round() * step_size).clamp(min, max)
    }

    /// The range's previous discrete step from a certain value. Stepped ranges move by their step
    /// size, all other ranges split the normalized range into 50 segments, or 200 if `finer` is
    /// set.
    pub fn previous_step(&self, from: f32, finer: bool) -> f32 {
        match self {
            FloatRange::Stepped { step, .. } => self.snap_to_step(from - step, *step),
            FloatRange::Linear { .. } | FloatRange::Biased { .. } => {
                self.unnormalize(self.normalize(from) - naive_step_size(finer))
            }
        }
    }

    /// The range's next discrete step from a certain value. See
    /// [`previous_step()`][Self::previous_step()].
    pub fn next_step(&self, from: f32, finer: bool) -> f32 {
        match self {
            FloatRange::Stepped { step, .. } => self.snap_to_step(from + step, *step),
            FloatRange::Linear { .. } | FloatRange::Biased { .. } => {
                self.unnormalize(self.normalize(from) + naive_step_size(finer))
            }
        }
    }

    /// Emits debug assertions to make sure that range minima are always less than the maxima, that
    /// steps are positive, and that biases are within `[-1, 1]`.
    pub(super) fn assert_validity(&self) {
        let (min, max) = (self.min(), self.max());
        paramex_debug_assert!(
            min < max,
            "The range minimum ({}) needs to be less than the range maximum ({}) and they cannot \
             be equal",
            min,
            max
        );

        match self {
            FloatRange::Linear { .. } => (),
            FloatRange::Stepped { step, .. } => {
                paramex_debug_assert!(*step > 0.0, "Step sizes need to be positive, got {}", step);
            }
            FloatRange::Biased { bias, .. } => {
                paramex_debug_assert!(
                    (-1.0..=1.0).contains(bias),
                    "The bias needs to be in [-1, 1], got {}",
                    bias
                );
            }
        }
    }
}

/// The `a` coefficient and the range's width for [`FloatRange::Biased`]. `a` is the bias remapped
/// from `[-1, 1]` to `[0, 1]`.
#[inline]
fn biased_coefficients(min: f32, max: f32, bias: f32) -> (f32, f32) {
    ((bias * 0.5) + 0.5, max - min)
}

#[inline]
fn naive_step_size(finer: bool) -> f32 {
    if finer {
        0.005
    } else {
        0.02
    }
}
