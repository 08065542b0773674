//! The engine's input type: text, or an already-native number.

use std::fmt;

/// A value presented for classification or conversion.
///
/// Dynamic "string or number" dispatch in loosely-typed callers maps to
/// this tagged variant: text borrows from the caller, native numbers are
/// carried by value. Every engine call takes an `Input` and a policy and
/// touches nothing else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input<'a> {
    /// A textual candidate, scanned by the classifier.
    Text(&'a str),
    /// A native integer, classified directly.
    Int(i64),
    /// A native float, classified directly.
    Float(f64),
}

impl<'a> Input<'a> {
    /// True for the `Text` variant.
    pub fn is_text(self) -> bool {
        matches!(self, Input::Text(_))
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl From<i64> for Input<'_> {
    fn from(v: i64) -> Self {
        Input::Int(v)
    }
}

impl From<f64> for Input<'_> {
    fn from(v: f64) -> Self {
        Input::Float(v)
    }
}

impl fmt::Display for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(s) => write!(f, "{:?}", s),
            Input::Int(v) => write!(f, "{}", v),
            Input::Float(v) => write!(f, "{}", v),
        }
    }
}
