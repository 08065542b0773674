//! Numeric shape classification.
//!
//! Classification is total: any input under any policy produces a
//! `NumericShape`, never an error. All failure vocabulary is confined to
//! the conversion layer.
//!
//! # Examples
//!
//! ```rust
//! use numscan::{classify, Input, NumericShape, Policy};
//!
//! let policy = Policy::default();
//! assert_eq!(classify(Input::Text("42"), &policy), NumericShape::Integer);
//! assert_eq!(classify(Input::Text("3.0"), &policy), NumericShape::IntLike);
//! assert_eq!(classify(Input::Text("3.5"), &policy), NumericShape::Float);
//! ```

pub(crate) mod scanner;
pub(crate) mod unicode;

use crate::input::Input;
use crate::policy::{InputKinds, Policy};
use crate::shape::{NonNumericKind, NumericShape, ValueKind};
use scanner::{scan_text, Scan, Special};

/// Classify an input into its numeric shape under a policy.
pub fn classify(input: Input, policy: &Policy) -> NumericShape {
    if kind_disallowed(input, policy) {
        return NumericShape::NotNumeric(NonNumericKind::Malformed);
    }
    match input {
        Input::Int(_) => NumericShape::Integer,
        Input::Float(v) => classify_float_value(v, policy),
        Input::Text(s) => match scan_text(s, policy) {
            Some(scan) => classify_scan(&scan, policy),
            None => NumericShape::NotNumeric(NonNumericKind::Malformed),
        },
    }
}

fn classify_scan(scan: &Scan, policy: &Policy) -> NumericShape {
    if let Some(special) = scan.special {
        let allowed = match special {
            Special::Infinity => policy.allow_inf,
            Special::Nan => policy.allow_nan,
        };
        return if allowed {
            NumericShape::Float
        } else {
            NumericShape::NotNumeric(NonNumericKind::Malformed)
        };
    }
    let shape = scan_shape(scan);
    if shape.is_integral() && exceeds_digit_budget(scan, policy) {
        NumericShape::NotNumeric(NonNumericKind::TooLong)
    } else {
        shape
    }
}

/// True when the input is a plain integer in shape.
pub fn is_integer(input: Input, policy: &Policy) -> bool {
    classify(input, policy) == NumericShape::Integer
}

/// True when the input is written in floating form (`Float` or `IntLike`).
pub fn is_float(input: Input, policy: &Policy) -> bool {
    matches!(
        classify(input, policy),
        NumericShape::Float | NumericShape::IntLike
    )
}

/// True when the input carries an integral value, however written.
pub fn is_int_like(input: Input, policy: &Policy) -> bool {
    classify(input, policy).is_integral()
}

/// True when the input is numeric at all.
pub fn is_real_number(input: Input, policy: &Policy) -> bool {
    classify(input, policy).is_numeric()
}

/// The kind of value a `Real` conversion of this input would produce.
///
/// `IntLike` collapses to `Int` when the policy coerces, and stays `Float`
/// otherwise. Anything non-numeric reports `Text`.
pub fn query_type(input: Input, policy: &Policy) -> ValueKind {
    match classify(input, policy) {
        NumericShape::Integer => ValueKind::Int,
        NumericShape::IntLike => {
            if policy.coerce {
                ValueKind::Int
            } else {
                ValueKind::Float
            }
        }
        NumericShape::Float => ValueKind::Float,
        NumericShape::NotNumeric(_) => ValueKind::Text,
    }
}

pub(crate) fn kind_disallowed(input: Input, policy: &Policy) -> bool {
    match policy.input_kinds {
        InputKinds::Any => false,
        InputKinds::StringOnly => !input.is_text(),
        InputKinds::NumberOnly => input.is_text(),
    }
}

/// Structural shape of a non-special scan, before any digit-length check.
pub(crate) fn scan_shape(scan: &Scan) -> NumericShape {
    if !scan.has_float_syntax() {
        NumericShape::Integer
    } else if scan.is_integral() {
        NumericShape::IntLike
    } else {
        NumericShape::Float
    }
}

/// True when producing an integer from this scan would exceed `max_int_len`.
pub(crate) fn exceeds_digit_budget(scan: &Scan, policy: &Policy) -> bool {
    scan.significant_digits() > policy.max_int_len
}

/// Shape of a native float value.
pub(crate) fn classify_float_value(v: f64, policy: &Policy) -> NumericShape {
    if v.is_nan() {
        return if policy.allow_nan {
            NumericShape::Float
        } else {
            NumericShape::NotNumeric(NonNumericKind::Malformed)
        };
    }
    if v.is_infinite() {
        return if policy.allow_inf {
            NumericShape::Float
        } else {
            NumericShape::NotNumeric(NonNumericKind::Malformed)
        };
    }
    if float_is_intlike(v) {
        NumericShape::IntLike
    } else {
        NumericShape::Float
    }
}

/// Finite, zero fractional part, and exactly representable as an `i64`.
pub(crate) fn float_is_intlike(v: f64) -> bool {
    // 2^63 is exact as an f64; i64::MAX is not.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    v.fract() == 0.0 && v >= -I64_BOUND && v < I64_BOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::NonNumericKind;

    fn shape(text: &str) -> NumericShape {
        classify(Input::Text(text), &Policy::default())
    }

    #[test]
    fn classifies_text_shapes() {
        assert_eq!(shape("42"), NumericShape::Integer);
        assert_eq!(shape("-5"), NumericShape::Integer);
        assert_eq!(shape("+5"), NumericShape::Integer);
        assert_eq!(shape("3.0"), NumericShape::IntLike);
        assert_eq!(shape("3.5"), NumericShape::Float);
        assert_eq!(shape("1e-3"), NumericShape::Float);
        assert_eq!(
            shape("--5"),
            NumericShape::NotNumeric(NonNumericKind::Malformed)
        );
        assert_eq!(
            shape("abc"),
            NumericShape::NotNumeric(NonNumericKind::Malformed)
        );
    }

    #[test]
    fn classifies_native_numbers() {
        let policy = Policy::default();
        assert_eq!(classify(Input::Int(7), &policy), NumericShape::Integer);
        assert_eq!(classify(Input::Float(3.0), &policy), NumericShape::IntLike);
        assert_eq!(classify(Input::Float(3.5), &policy), NumericShape::Float);
        assert_eq!(classify(Input::Float(1e300), &policy), NumericShape::Float);
    }

    #[test]
    fn digit_limit_reclassifies_as_too_long() {
        let policy = Policy::default().with_max_int_len(4);
        assert_eq!(
            classify(Input::Text("1234"), &policy),
            NumericShape::Integer
        );
        assert_eq!(
            classify(Input::Text("12345"), &policy),
            NumericShape::NotNumeric(NonNumericKind::TooLong)
        );
        assert_eq!(
            classify(Input::Text("12345.0"), &policy),
            NumericShape::NotNumeric(NonNumericKind::TooLong)
        );
        // Floats with fractional parts carry no digit limit.
        assert_eq!(classify(Input::Text("12345.5"), &policy), NumericShape::Float);
    }

    #[test]
    fn input_kind_gate() {
        let strings = Policy::default().with_input_kinds(InputKinds::StringOnly);
        let numbers = Policy::default().with_input_kinds(InputKinds::NumberOnly);
        assert!(is_integer(Input::Text("5"), &strings));
        assert!(!is_integer(Input::Int(5), &strings));
        assert!(is_integer(Input::Int(5), &numbers));
        assert!(!is_integer(Input::Text("5"), &numbers));
    }

    #[test]
    fn special_values_follow_policy() {
        let policy = Policy::default();
        assert_eq!(classify(Input::Text("inf"), &policy), NumericShape::Float);
        assert_eq!(classify(Input::Text("nan"), &policy), NumericShape::Float);
        assert_eq!(
            classify(Input::Float(f64::NAN), &policy),
            NumericShape::Float
        );

        let no_nan = Policy::default().with_nan(false);
        assert!(!is_float(Input::Text("nan"), &no_nan));
        assert!(!is_float(Input::Float(f64::NAN), &no_nan));
        let no_inf = Policy::default().with_inf(false);
        assert!(!is_float(Input::Text("-inf"), &no_inf));
        assert!(is_float(Input::Text("1.5"), &no_inf));
    }

    #[test]
    fn predicates_cover_shapes() {
        let policy = Policy::default();
        assert!(is_int_like(Input::Text("5"), &policy));
        assert!(is_int_like(Input::Text("5.0"), &policy));
        assert!(!is_int_like(Input::Text("5.5"), &policy));
        assert!(is_float(Input::Text("5.0"), &policy));
        assert!(!is_float(Input::Text("5"), &policy));
        assert!(is_real_number(Input::Text("5"), &policy));
        assert!(!is_real_number(Input::Text(""), &policy));
    }

    #[test]
    fn query_type_follows_coercion() {
        let policy = Policy::default();
        assert_eq!(query_type(Input::Text("42"), &policy), ValueKind::Int);
        assert_eq!(query_type(Input::Text("42.0"), &policy), ValueKind::Int);
        assert_eq!(query_type(Input::Text("42.5"), &policy), ValueKind::Float);
        assert_eq!(query_type(Input::Text("x"), &policy), ValueKind::Text);

        let no_coerce = Policy::default().with_coerce(false);
        assert_eq!(query_type(Input::Text("42.0"), &no_coerce), ValueKind::Float);
    }
}
