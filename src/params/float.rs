//! Continuous (or discrete, with a stepped range) floating point parameters.

use atomic_float::AtomicF32;
use std::fmt::{Debug, Display};
use std::sync::atomic::Ordering;

use super::range::FloatRange;
use super::{param_id_from_name, Param, ParamMut};
use crate::formatters::Unit;

/// A floating point parameter that's stored unnormalized. The range is used for the normalization
/// process, and the unit decides how the value is shown and parsed.
///
/// The value is written from the GUI thread and read from the audio thread. Both sides use relaxed
/// atomic loads and stores, so the audio thread may see a new value one block late but it will
/// never see a torn value.
pub struct FloatParam {
    /// The field's current plain value.
    value: AtomicF32,
    /// The field's current value normalized to the `[0, 1]` range.
    normalized_value: AtomicF32,
    /// The field's default plain, unnormalized value.
    default: f32,

    /// The distribution of the parameter's values.
    range: FloatRange,
    /// The parameter's stable ID, derived from `name`.
    id: String,
    /// The parameter's human readable display name.
    name: String,
    /// The unit the plain value is expressed in.
    unit: Unit,
}

impl Display for FloatParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unit.format(self.value()))
    }
}

impl Debug for FloatParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // This uses the above `Display` instance to show the value
        write!(f, "{}: {}", &self.name, &self)
    }
}

impl Param for FloatParam {
    type Plain = f32;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn unit(&self) -> &'static str {
        self.unit.label()
    }

    #[inline]
    fn plain_value(&self) -> Self::Plain {
        self.value.load(Ordering::Relaxed)
    }

    #[inline]
    fn normalized_value(&self) -> f32 {
        self.normalized_value.load(Ordering::Relaxed)
    }

    #[inline]
    fn default_plain_value(&self) -> Self::Plain {
        self.default
    }

    fn previous_step(&self, from: Self::Plain, finer: bool) -> Self::Plain {
        self.range.previous_step(from, finer)
    }

    fn next_step(&self, from: Self::Plain, finer: bool) -> Self::Plain {
        self.range.next_step(from, finer)
    }

    fn normalized_value_to_string(&self, normalized: f32) -> String {
        self.unit.format(self.preview_plain(normalized))
    }

    fn string_to_normalized_value(&self, string: &str) -> f32 {
        self.preview_normalized(self.unit.parse(string))
    }

    #[inline]
    fn preview_normalized(&self, plain: Self::Plain) -> f32 {
        self.range.normalize(plain)
    }

    #[inline]
    fn preview_plain(&self, normalized: f32) -> Self::Plain {
        self.range.unnormalize(normalized)
    }
}

impl ParamMut for FloatParam {
    fn set_plain_value(&self, plain: Self::Plain) -> bool {
        if plain.is_nan() {
            paramex_debug_assert_failure!("Tried to set '{}' to NaN, ignoring", self.id);
            return false;
        }

        let value = plain.clamp(self.range.min(), self.range.max());
        let normalized_value = self.preview_normalized(value);

        let old_value = self.value.swap(value, Ordering::Relaxed);
        if value != old_value {
            self.normalized_value
                .store(normalized_value, Ordering::Relaxed);

            true
        } else {
            false
        }
    }

    fn set_normalized_value(&self, normalized: f32) -> bool {
        // NOTE: The double conversion makes sure the stored normalized value always corresponds to
        //       the stored plain value, even for stepped ranges
        self.set_plain_value(self.preview_plain(normalized))
    }
}

impl FloatParam {
    /// Build a new [`FloatParam`]. The ID is derived from `name`, see
    /// [`param_id_from_name()`][super::param_id_from_name()].
    pub fn new(name: impl Into<String>, default: f32, range: FloatRange, unit: Unit) -> Self {
        range.assert_validity();
        paramex_debug_assert!(
            (range.min()..=range.max()).contains(&default),
            "The default value {} lies outside of the parameter's range",
            default
        );

        let name = name.into();
        let default = default.clamp(range.min(), range.max());

        Self {
            value: AtomicF32::new(default),
            normalized_value: AtomicF32::new(range.normalize(default)),
            default,

            range,
            id: param_id_from_name(&name),
            name,
            unit,
        }
    }

    /// The field's current plain value. Equivalent to calling `param.plain_value()`. This is safe to
    /// call from the audio thread.
    #[inline]
    pub fn value(&self) -> f32 {
        self.plain_value()
    }

    /// The range of valid plain values for this parameter.
    #[inline]
    pub fn range(&self) -> FloatRange {
        self.range
    }

    /// The unit this parameter's values are expressed in.
    #[inline]
    pub fn unit_kind(&self) -> Unit {
        self.unit
    }
}
