//! Parameters, their ranges, and the table that holds on to a plugin's parameters. A plugin
//! declares its parameters once by building a [`ParamLayout`] out of [`FloatParam`]s. That layout
//! is then shared between the audio thread, which only reads the values, and the editor, which
//! writes to them through a [`ParamSetter`][crate::context::gui::ParamSetter].

use std::fmt::{Debug, Display};

pub mod float;
pub mod layout;
pub mod range;

pub use float::FloatParam;
pub use layout::{ParamInfo, ParamLayout};
pub use range::FloatRange;

/// Describes a single parameter of any type.
pub trait Param: Display + Debug + Send + Sync {
    /// The plain parameter type.
    type Plain: PartialEq;

    /// The parameter's stable ID. This is derived from the display name using
    /// [`param_id_from_name()`].
    fn id(&self) -> &str;

    /// Get the human readable name for this parameter.
    fn name(&self) -> &str;

    /// Get the unit label for this parameter.
    fn unit(&self) -> &'static str;

    /// Get the plain, unnormalized value for this parameter.
    fn plain_value(&self) -> Self::Plain;

    /// Get the normalized `[0, 1]` value for this parameter.
    fn normalized_value(&self) -> f32;

    /// Get the plain, unnormalized default value for this parameter.
    fn default_plain_value(&self) -> Self::Plain;

    /// Get the normalized `[0, 1]` default value for this parameter.
    #[inline]
    fn default_normalized_value(&self) -> f32 {
        self.preview_normalized(self.default_plain_value())
    }

    /// Get the previous step for a plain value. See [`FloatRange::previous_step()`].
    fn previous_step(&self, from: Self::Plain, finer: bool) -> Self::Plain;

    /// Get the next step for a plain value. See [`FloatRange::next_step()`].
    fn next_step(&self, from: Self::Plain, finer: bool) -> Self::Plain;

    /// The same as [`previous_step()`][Self::previous_step()], but for normalized values.
    fn previous_normalized_step(&self, from: f32, finer: bool) -> f32 {
        self.preview_normalized(self.previous_step(self.preview_plain(from), finer))
    }

    /// The same as [`next_step()`][Self::next_step()], but for normalized values.
    fn next_normalized_step(&self, from: f32, finer: bool) -> f32 {
        self.preview_normalized(self.next_step(self.preview_plain(from), finer))
    }

    /// Get the string representation for a normalized value, including the unit.
    fn normalized_value_to_string(&self, normalized: f32) -> String;

    /// Get the normalized value for a string. Parsing is permissive: text that cannot be read
    /// results in a best-effort value instead of an error, so this always returns something.
    fn string_to_normalized_value(&self, string: &str) -> f32;

    /// Get the normalized value for a plain, unnormalized value.
    fn preview_normalized(&self, plain: Self::Plain) -> f32;

    /// Get the plain, unnormalized value for a normalized value. This snaps to the range's step
    /// size if it has one.
    fn preview_plain(&self, normalized: f32) -> Self::Plain;
}

/// Setters for parameter values. Values are stored atomically so these only need a shared
/// reference. Plugins and editors should not call these directly: editors go through a
/// [`ParamSetter`][crate::context::gui::ParamSetter] so the host is informed about the change, and
/// the audio thread only ever reads values.
pub trait ParamMut: Param {
    /// Set this parameter based on a plain, unnormalized value. The value is clamped to the
    /// parameter's range. Returns whether the value changed.
    fn set_plain_value(&self, plain: Self::Plain) -> bool;

    /// Set this parameter based on a normalized value. This snaps to the range's step size if it
    /// has one. Returns whether the value changed.
    fn set_normalized_value(&self, normalized: f32) -> bool;
}

/// Derive a parameter's stable ID from its display name by lowercasing it and removing all spaces.
/// `"Gain Wet"` becomes `"gainwet"`.
pub fn param_id_from_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_from_name() {
        assert_eq!(param_id_from_name("Gain Wet"), "gainwet");
        assert_eq!(param_id_from_name("Frequency"), "frequency");
        assert_eq!(param_id_from_name(" Low  Cut "), "lowcut");
    }
}
