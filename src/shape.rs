//! Shape and value vocabulary for the classification and conversion engine.
//!
//! A `NumericShape` describes what kind of number an input *looks like*;
//! a `Number` is the native value a conversion actually produced. Keeping
//! the two separate lets classification stay total (it never fails) while
//! conversion reports precise errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The numeric shape of an input, as determined by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericShape {
    /// Written as a plain integer (`"42"`, `-7`).
    Integer,
    /// Written in floating form with a nonzero fractional component
    /// (`"3.5"`, `"1e-3"`), or a special value (`inf`, `nan`).
    Float,
    /// Written in floating form but integer in value (`"3.0"`, `"30e-1"`).
    IntLike,
    /// Not recognizable as a number under the governing policy.
    NotNumeric(NonNumericKind),
}

/// Why an input failed to classify as numeric.
///
/// `TooLong` is distinct from `Malformed` so callers can tell "this was
/// never a number" apart from "this was a number, but longer than the
/// policy's digit limit".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NonNumericKind {
    /// The input does not parse as any numeric shape.
    Malformed,
    /// Integer-shaped, but with more significant digits than the policy's
    /// `max_int_len` permits.
    TooLong,
}

impl NumericShape {
    /// True for any shape a conversion could act on.
    pub fn is_numeric(self) -> bool {
        !matches!(self, NumericShape::NotNumeric(_))
    }

    /// True when the shape carries an integral value (`Integer` or `IntLike`).
    pub fn is_integral(self) -> bool {
        matches!(self, NumericShape::Integer | NumericShape::IntLike)
    }
}

impl fmt::Display for NumericShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericShape::Integer => "integer",
            NumericShape::Float => "float",
            NumericShape::IntLike => "int-like float",
            NumericShape::NotNumeric(NonNumericKind::Malformed) => "non-numeric",
            NumericShape::NotNumeric(NonNumericKind::TooLong) => "over-long integer",
        };
        f.write_str(name)
    }
}

/// A converted native value: either an `i64` or an `f64`.
///
/// Serializes untagged, so a policy file can write a substitution default
/// as plain `5` or `5.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// The contained integer, if this is `Int`.
    pub fn as_int(self) -> Option<i64> {
        match self {
            Number::Int(v) => Some(v),
            Number::Float(_) => None,
        }
    }

    /// The value as an `f64`, converting an `Int` if necessary.
    pub fn as_float(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// True when this is the `Int` variant.
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

/// The kind of value a conversion would produce for a given input,
/// reported by `query_type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// Converts to a native integer.
    Int,
    /// Converts to a native float.
    Float,
    /// Not convertible; the input stays what it was.
    Text,
}
