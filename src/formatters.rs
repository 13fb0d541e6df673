//! Formatting and parsing parameter values in the units supported by [`FloatParam`].
//!
//! [`FloatParam`]: crate::params::FloatParam

use serde::Serialize;

/// The unit a parameter's plain value is expressed in. This selects both how the value is rendered
/// as text and how typed text is read back in. Parsing never fails: malformed input results in a
/// best-effort value, usually `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    /// Rendered as `-3.00 dB`.
    Decibel,
    /// Rendered as `50.00 hz`, `500.0 hz`, or `2.0 khz` depending on the magnitude.
    Hertz,
}

impl Unit {
    /// The short label for this unit, as reported to hosts that display units separately.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Decibel => "dB",
            Unit::Hertz => "hz",
        }
    }

    /// Render a plain value as text, including the unit.
    pub fn format(&self, value: f32) -> String {
        match self {
            Unit::Decibel => format!("{value:.2} dB"),
            Unit::Hertz => {
                if value < 100.0 {
                    format!("{value:.2} hz")
                } else if value < 1000.0 {
                    format!("{value:.1} hz")
                } else if value >= 1000.0 {
                    format!("{:.1} khz", value / 1000.0)
                } else {
                    // Only NaN ends up here
                    String::from(" hz")
                }
            }
        }
    }

    /// Read a plain value from text. The unit may or may not be included.
    pub fn parse(&self, string: &str) -> f32 {
        match self {
            Unit::Decibel => {
                let cleaned: String = string
                    .chars()
                    .filter(|c| !matches!(c, 'd' | 'D' | 'b' | 'B'))
                    .collect();

                leading_f32(&cleaned)
            }
            Unit::Hertz => {
                let cleaned: String = string
                    .chars()
                    .filter(|c| !matches!(c, 'h' | 'H' | 'z' | 'Z'))
                    .collect();
                let cleaned = cleaned.trim_end();

                match cleaned.strip_suffix(&['k', 'K']) {
                    Some(kilo) => leading_f32(kilo) * 1000.0,
                    None => leading_f32(cleaned),
                }
            }
        }
    }
}

/// Read the number at the start of `string`, ignoring leading whitespace and anything that follows
/// the number. Returns `0.0` if the string does not start with a number.
pub fn leading_f32(string: &str) -> f32 {
    let string = string.trim_start();
    let bytes = string.as_bytes();
    let skip_digits = |mut idx: usize| {
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        idx
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let mantissa_start = end;
    end = skip_digits(end);
    if bytes.get(end) == Some(&b'.') {
        end = skip_digits(end + 1);
    }
    if !bytes[mantissa_start..end].iter().any(u8::is_ascii_digit) {
        return 0.0;
    }

    // The exponent is only part of the number if it has at least one digit, `3e` is just `3`
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }

        let exponent_digits_start = exponent_end;
        exponent_end = skip_digits(exponent_end);
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    string[..end].parse().unwrap_or(0.0)
}
