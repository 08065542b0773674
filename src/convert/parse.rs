//! Numeric parsing over normalized scans.
//!
//! Integer accumulation is overflow-checked; float parsing defers the
//! actual rounding to the standard library's correctly-rounded
//! string-to-float conversion after the policy's exponent window has been
//! enforced.

use crate::classify::scanner::{Scan, Special};
use crate::errors::NumericError;
use crate::policy::{ExpBoundsMode, Policy};

/// `2^63`, exactly representable as an `f64`. `i64::MAX` is not.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Parse an integer-shaped scan (digits only, no float syntax).
pub(crate) fn parse_integer(scan: &Scan, original: &str) -> Result<i64, NumericError> {
    accumulate(scan.digits.iter().copied(), scan.negative, original)
}

/// Parse an int-like scan (float syntax, integral value) exactly, without
/// a float round-trip. The value is the leading `point + exp` digits of
/// the mantissa, zero-padded on the right when the exponent reaches past
/// them.
pub(crate) fn parse_integral(scan: &Scan, original: &str) -> Result<i64, NumericError> {
    let width = scan.point.saturating_add(scan.exp);
    if width <= 0 || scan.is_zero() {
        return Ok(0);
    }
    let digits = (0..width).map(|i| {
        usize::try_from(i)
            .ok()
            .and_then(|i| scan.digits.get(i).copied())
            .unwrap_or(0)
    });
    accumulate(digits, scan.negative, original)
}

/// Parse any scan as a float, enforcing the exponent window.
pub(crate) fn parse_float(scan: &Scan, original: &str, policy: &Policy) -> Result<f64, NumericError> {
    if let Some(special) = scan.special {
        return match special {
            Special::Infinity if policy.allow_inf => Ok(apply_sign(f64::INFINITY, scan.negative)),
            Special::Infinity => Err(NumericError::overflow(original)),
            Special::Nan if policy.allow_nan => Ok(apply_sign(f64::NAN, scan.negative)),
            Special::Nan => Err(NumericError::malformed(original)),
        };
    }

    if scan.is_zero() {
        return Ok(apply_sign(0.0, scan.negative));
    }

    // The window is inclusive at both edges.
    if let Some(magnitude) = scan.magnitude_exponent() {
        if magnitude > i64::from(policy.max_exp) {
            return match policy.exp_bounds {
                ExpBoundsMode::Reject => Err(NumericError::overflow(original)),
                ExpBoundsMode::Clamp => Ok(apply_sign(pow10(policy.max_exp), scan.negative)),
            };
        }
        if magnitude < i64::from(policy.min_exp) {
            return match policy.exp_bounds {
                ExpBoundsMode::Reject => Err(NumericError::underflow(original)),
                ExpBoundsMode::Clamp => Ok(apply_sign(0.0, scan.negative)),
            };
        }
    }

    // Re-render as 0.DDDDeN so the standard library performs the
    // correctly-rounded conversion on clean ASCII digits.
    let mut text = String::with_capacity(scan.digits.len() + 8);
    text.push_str("0.");
    for &d in &scan.digits {
        text.push((b'0' + d) as char);
    }
    text.push('e');
    text.push_str(&scan.point.saturating_add(scan.exp).to_string());

    let value: f64 = text
        .parse()
        .map_err(|_| NumericError::malformed(original))?;

    // A window wider than f64 can still run off the representable range;
    // treat that like the window edges.
    if value.is_infinite() {
        return match policy.exp_bounds {
            ExpBoundsMode::Reject => Err(NumericError::overflow(original)),
            ExpBoundsMode::Clamp => Ok(apply_sign(pow10(policy.max_exp), scan.negative)),
        };
    }
    if value == 0.0 {
        return match policy.exp_bounds {
            ExpBoundsMode::Reject => Err(NumericError::underflow(original)),
            ExpBoundsMode::Clamp => Ok(apply_sign(0.0, scan.negative)),
        };
    }

    Ok(apply_sign(value, scan.negative))
}

/// Truncate a float toward zero into an `i64`.
pub(crate) fn truncate_to_i64(v: f64, original: &str) -> Result<i64, NumericError> {
    if v.is_nan() {
        return Err(NumericError::malformed(original));
    }
    let truncated = v.trunc();
    if !(-I64_BOUND..I64_BOUND).contains(&truncated) {
        return Err(NumericError::overflow(original));
    }
    Ok(truncated as i64)
}

/// Checked accumulation in the negative domain, so `i64::MIN` parses.
fn accumulate(
    digits: impl Iterator<Item = u8>,
    negative: bool,
    original: &str,
) -> Result<i64, NumericError> {
    let mut acc: i64 = 0;
    for d in digits {
        acc = acc
            .checked_mul(10)
            .and_then(|a| a.checked_sub(i64::from(d)))
            .ok_or_else(|| NumericError::overflow(original))?;
    }
    if negative {
        Ok(acc)
    } else {
        acc.checked_neg()
            .ok_or_else(|| NumericError::overflow(original))
    }
}

fn apply_sign(v: f64, negative: bool) -> f64 {
    if negative {
        -v
    } else {
        v
    }
}

fn pow10(exp: i32) -> f64 {
    let v: f64 = format!("1e{}", exp).parse().unwrap_or(f64::INFINITY);
    if v.is_infinite() {
        f64::MAX
    } else {
        v
    }
}
