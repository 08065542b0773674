//! Conversion of classified inputs to native values.
//!
//! One internal engine serves both calling conventions: the strict
//! wrappers surface the full [`NumericError`](crate::errors::NumericError)
//! taxonomy, and [`resolve`] routes failures through the policy's
//! [`OnFail`](crate::policy::OnFail) axis instead.
//!
//! # Examples
//!
//! ```rust
//! use numscan::{convert_to_real, Input, Number, Policy};
//!
//! let policy = Policy::default();
//! assert_eq!(convert_to_real(Input::Text("42"), &policy), Ok(Number::Int(42)));
//! assert_eq!(convert_to_real(Input::Text("42.0"), &policy), Ok(Number::Int(42)));
//! assert_eq!(convert_to_real(Input::Text("42.5"), &policy), Ok(Number::Float(42.5)));
//! ```

pub(crate) mod parse;

use std::fmt;

use crate::classify::scanner::{scan_text, Scan, Special};
use crate::classify::{exceeds_digit_budget, float_is_intlike, scan_shape};
use crate::errors::NumericError;
use crate::input::Input;
use crate::policy::{InputKinds, OnFail, Policy};
use crate::shape::{Number, NumericShape};

/// The numeric kind a conversion aims for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Strict integer: only `Integer`-shaped input converts.
    Int,
    /// Float: any numeric shape converts.
    Float,
    /// Integer when the value is integral (and the policy coerces),
    /// float otherwise.
    Real,
    /// Truncate any real value toward zero into an integer.
    ForceInt,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Target::Int => "int",
            Target::Float => "float",
            Target::Real => "real",
            Target::ForceInt => "force-int",
        };
        f.write_str(name)
    }
}

/// The conversion engine: one input, one target kind, one policy.
///
/// Strict by construction — every failure is a typed error. The policy's
/// `on_fail` axis is applied by [`resolve`], not here.
pub fn convert(input: Input, target: Target, policy: &Policy) -> Result<Number, NumericError> {
    match target {
        Target::Int | Target::ForceInt => to_integer(input, target, policy).map(Number::Int),
        Target::Float => to_float(input, policy).map(Number::Float),
        Target::Real => to_real(input, policy),
    }
}

/// Strict conversion to `i64`; only integer-shaped input succeeds.
pub fn convert_to_int(input: Input, policy: &Policy) -> Result<i64, NumericError> {
    to_integer(input, Target::Int, policy)
}

/// Strict conversion to `f64`; any numeric shape succeeds.
pub fn convert_to_float(input: Input, policy: &Policy) -> Result<f64, NumericError> {
    to_float(input, policy)
}

/// Strict conversion to int-if-int-like-else-float.
pub fn convert_to_real(input: Input, policy: &Policy) -> Result<Number, NumericError> {
    to_real(input, policy)
}

/// Strict truncating conversion to `i64`; any real value succeeds.
pub fn force_convert_to_int(input: Input, policy: &Policy) -> Result<i64, NumericError> {
    to_integer(input, Target::ForceInt, policy)
}

/// Policy-resolving conversion.
///
/// Success is `Ok(Some(value))`. Failure follows the policy's `on_fail`
/// axis: `Raise` propagates the typed error, `Substitute` yields the
/// configured default, `Sentinel` yields `None`.
pub fn resolve(
    input: Input,
    target: Target,
    policy: &Policy,
) -> Result<Option<Number>, NumericError> {
    match convert(input, target, policy) {
        Ok(value) => Ok(Some(value)),
        Err(err) => match policy.on_fail {
            OnFail::Raise => Err(err),
            OnFail::Substitute(default) => {
                log::trace!("substituting {} for failed conversion of {}: {}", default, input, err);
                Ok(Some(default))
            }
            OnFail::Sentinel => {
                log::trace!("sentinel for failed conversion of {}: {}", input, err);
                Ok(None)
            }
        },
    }
}

/// Best-effort integer conversion: `None` on any failure.
pub fn try_int(input: Input, policy: &Policy) -> Option<i64> {
    to_integer(input, Target::Int, policy).ok()
}

/// Best-effort float conversion: `None` on any failure.
pub fn try_float(input: Input, policy: &Policy) -> Option<f64> {
    to_float(input, policy).ok()
}

/// Best-effort real conversion: `None` on any failure.
pub fn try_real(input: Input, policy: &Policy) -> Option<Number> {
    to_real(input, policy).ok()
}

/// Best-effort truncating conversion: `None` on any failure.
pub fn try_force_int(input: Input, policy: &Policy) -> Option<i64> {
    to_integer(input, Target::ForceInt, policy).ok()
}

fn check_kind(input: Input, policy: &Policy) -> Result<(), NumericError> {
    match policy.input_kinds {
        InputKinds::NumberOnly if input.is_text() => Err(NumericError::disallowed_kind("string")),
        InputKinds::StringOnly if !input.is_text() => Err(NumericError::disallowed_kind("number")),
        _ => Ok(()),
    }
}

fn gate_nonfinite(v: f64, policy: &Policy) -> Result<(), NumericError> {
    if v.is_nan() && !policy.allow_nan {
        return Err(NumericError::malformed(v.to_string()));
    }
    if v.is_infinite() && !policy.allow_inf {
        return Err(NumericError::overflow(v.to_string()));
    }
    Ok(())
}

/// Integer-producing conversion for the `Int` and `ForceInt` targets.
fn to_integer(input: Input, target: Target, policy: &Policy) -> Result<i64, NumericError> {
    check_kind(input, policy)?;
    match input {
        Input::Int(v) => Ok(v),
        Input::Float(v) => {
            gate_nonfinite(v, policy)?;
            match target {
                Target::ForceInt => parse::truncate_to_i64(v, &v.to_string()),
                _ => {
                    if float_is_intlike(v) {
                        Ok(v as i64)
                    } else {
                        Err(NumericError::type_mismatch(NumericShape::Float, Target::Int))
                    }
                }
            }
        }
        Input::Text(s) => text_to_integer(s, target, policy),
    }
}

fn text_to_integer(s: &str, target: Target, policy: &Policy) -> Result<i64, NumericError> {
    let scan = scan_text(s, policy).ok_or_else(|| NumericError::malformed(s))?;

    if let Some(special) = scan.special {
        return match target {
            Target::ForceInt => match special {
                Special::Infinity => Err(NumericError::overflow(s)),
                Special::Nan => Err(NumericError::malformed(s)),
            },
            _ => Err(NumericError::type_mismatch(NumericShape::Float, Target::Int)),
        };
    }

    match scan_shape(&scan) {
        NumericShape::Integer => integral_within_budget(&scan, s, policy, parse::parse_integer),
        NumericShape::IntLike if target == Target::ForceInt => {
            integral_within_budget(&scan, s, policy, parse::parse_integral)
        }
        shape => match target {
            Target::ForceInt => {
                parse::parse_float(&scan, s, policy).and_then(|v| parse::truncate_to_i64(v, s))
            }
            _ => Err(NumericError::type_mismatch(shape, Target::Int)),
        },
    }
}

/// Parse an integral scan, enforcing the policy's digit budget first.
///
/// The budget gates integer production only; float-producing paths parse
/// digit strings of any length.
fn integral_within_budget(
    scan: &Scan,
    s: &str,
    policy: &Policy,
    parse_fn: fn(&Scan, &str) -> Result<i64, NumericError>,
) -> Result<i64, NumericError> {
    if exceeds_digit_budget(scan, policy) {
        return Err(NumericError::overflow(s));
    }
    parse_fn(scan, s)
}

/// Float-producing conversion for the `Float` target.
fn to_float(input: Input, policy: &Policy) -> Result<f64, NumericError> {
    check_kind(input, policy)?;
    match input {
        Input::Int(v) => Ok(v as f64),
        Input::Float(v) => {
            gate_nonfinite(v, policy)?;
            Ok(v)
        }
        Input::Text(s) => {
            let scan = scan_text(s, policy).ok_or_else(|| NumericError::malformed(s))?;
            parse::parse_float(&scan, s, policy)
        }
    }
}

/// Conversion for the `Real` target: int when int-like and coercing.
fn to_real(input: Input, policy: &Policy) -> Result<Number, NumericError> {
    check_kind(input, policy)?;
    match input {
        Input::Int(v) => Ok(Number::Int(v)),
        Input::Float(v) => {
            gate_nonfinite(v, policy)?;
            if float_is_intlike(v) && policy.coerce {
                Ok(Number::Int(v as i64))
            } else {
                Ok(Number::Float(v))
            }
        }
        Input::Text(s) => {
            let scan = scan_text(s, policy).ok_or_else(|| NumericError::malformed(s))?;
            if scan.special.is_some() {
                return parse::parse_float(&scan, s, policy).map(Number::Float);
            }
            match scan_shape(&scan) {
                NumericShape::Integer => {
                    integral_within_budget(&scan, s, policy, parse::parse_integer).map(Number::Int)
                }
                NumericShape::IntLike if policy.coerce => {
                    integral_within_budget(&scan, s, policy, parse::parse_integral).map(Number::Int)
                }
                _ => parse::parse_float(&scan, s, policy).map(Number::Float),
            }
        }
    }
}
