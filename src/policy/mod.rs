//! Per-call conversion policy.
//!
//! A `Policy` is a plain configuration record passed explicitly to every
//! engine call. There is no process-global state: two threads can run the
//! same conversion under different policies with no coordination.
//!
//! Policies are serde-(de)serializable so applications can embed them in
//! their own configuration files; see [`loader`] for the TOML entry points.
//!
//! # Examples
//!
//! ```rust
//! use numscan::policy::Policy;
//!
//! let policy = Policy::default()
//!     .with_max_int_len(9)
//!     .with_underscores(false);
//! assert_eq!(policy.max_int_len, 9);
//! ```

pub mod loader;

use crate::shape::Number;
use serde::{Deserialize, Serialize};

/// Digit count an `i64` can always hold without overflow.
pub const DEFAULT_MAX_INT_LEN: usize = 18;

/// Smallest base-10 exponent accepted by default before underflow handling.
pub const DEFAULT_MIN_EXP: i32 = -99;

/// Largest base-10 exponent accepted by default before overflow handling.
pub const DEFAULT_MAX_EXP: i32 = 99;

/// Which input kinds a call accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKinds {
    /// Only textual input is considered; native numbers are rejected.
    StringOnly,
    /// Only native numbers are considered; text is rejected.
    NumberOnly,
    /// Both kinds are considered.
    Any,
}

/// What a policy-resolving conversion does when the strict engine fails.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnFail {
    /// Surface the typed error to the caller (strict mode).
    Raise,
    /// Substitute the given default value silently.
    Substitute(Number),
    /// Return the sentinel (`None`) silently.
    Sentinel,
}

/// How values outside the `min_exp..=max_exp` window are handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpBoundsMode {
    /// Route through the overflow/underflow failure path.
    Reject,
    /// Clamp: overflow saturates to `±10^max_exp` (capped at `f64::MAX`
    /// when the window outruns `f64`), underflow flushes to signed zero.
    Clamp,
}

/// Configuration governing one classification or conversion call.
///
/// The exponent window is inclusive on both ends: a value whose decimal
/// magnitude exponent equals `max_exp` or `min_exp` is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Input kinds considered by this call.
    pub input_kinds: InputKinds,
    /// Failure resolution for policy-driven conversions.
    pub on_fail: OnFail,
    /// Smallest accepted base-10 magnitude exponent.
    pub min_exp: i32,
    /// Largest accepted base-10 magnitude exponent.
    pub max_exp: i32,
    /// Reject or clamp at the exponent window edges.
    pub exp_bounds: ExpBoundsMode,
    /// Maximum significant digit count for integer-shaped text.
    pub max_int_len: usize,
    /// Accept leading/trailing whitespace around a number.
    pub allow_whitespace: bool,
    /// Accept a single leading `+`/`-`.
    pub allow_sign: bool,
    /// Accept `_` as a digit separator between digits.
    pub allow_underscores: bool,
    /// Fold Unicode decimal digits to their ASCII value.
    pub allow_unicode_digits: bool,
    /// Recognize `inf`/`infinity`/`nan` literals in text.
    pub allow_special: bool,
    /// Accept infinite values (recognized literals and native floats).
    pub allow_inf: bool,
    /// Accept NaN values (recognized literals and native floats).
    pub allow_nan: bool,
    /// Collapse int-like floats to integers in `Real` conversions.
    pub coerce: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            input_kinds: InputKinds::Any,
            on_fail: OnFail::Raise,
            min_exp: DEFAULT_MIN_EXP,
            max_exp: DEFAULT_MAX_EXP,
            exp_bounds: ExpBoundsMode::Reject,
            max_int_len: DEFAULT_MAX_INT_LEN,
            allow_whitespace: true,
            allow_sign: true,
            allow_underscores: true,
            allow_unicode_digits: false,
            allow_special: true,
            allow_inf: true,
            allow_nan: true,
            coerce: true,
        }
    }
}

impl Policy {
    /// The default policy with `on_fail` set to raise typed errors.
    pub fn strict() -> Self {
        Self::default()
    }

    /// The default policy with `on_fail` set to the sentinel, so failed
    /// resolutions quietly return `None`.
    pub fn permissive() -> Self {
        Self {
            on_fail: OnFail::Sentinel,
            ..Self::default()
        }
    }

    pub fn with_input_kinds(mut self, kinds: InputKinds) -> Self {
        self.input_kinds = kinds;
        self
    }

    pub fn with_on_fail(mut self, on_fail: OnFail) -> Self {
        self.on_fail = on_fail;
        self
    }

    pub fn with_exp_window(mut self, min_exp: i32, max_exp: i32) -> Self {
        self.min_exp = min_exp;
        self.max_exp = max_exp;
        self
    }

    pub fn with_exp_bounds(mut self, mode: ExpBoundsMode) -> Self {
        self.exp_bounds = mode;
        self
    }

    pub fn with_max_int_len(mut self, len: usize) -> Self {
        self.max_int_len = len;
        self
    }

    pub fn with_whitespace(mut self, allow: bool) -> Self {
        self.allow_whitespace = allow;
        self
    }

    pub fn with_sign(mut self, allow: bool) -> Self {
        self.allow_sign = allow;
        self
    }

    pub fn with_underscores(mut self, allow: bool) -> Self {
        self.allow_underscores = allow;
        self
    }

    pub fn with_unicode_digits(mut self, allow: bool) -> Self {
        self.allow_unicode_digits = allow;
        self
    }

    pub fn with_special(mut self, allow: bool) -> Self {
        self.allow_special = allow;
        self
    }

    pub fn with_inf(mut self, allow: bool) -> Self {
        self.allow_inf = allow;
        self
    }

    pub fn with_nan(mut self, allow: bool) -> Self {
        self.allow_nan = allow;
        self
    }

    pub fn with_coerce(mut self, coerce: bool) -> Self {
        self.coerce = coerce;
        self
    }

    /// Validate the numeric limits.
    ///
    /// The exponent window must be non-empty and at least one integer
    /// digit must be permitted.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_exp > self.max_exp {
            return Err(format!(
                "exponent window is empty: min_exp ({}) > max_exp ({})",
                self.min_exp, self.max_exp
            ));
        }
        if self.max_int_len == 0 {
            return Err("max_int_len must be at least 1".to_string());
        }
        Ok(())
    }
}
