//! Single-pass text scanner.
//!
//! Produces a normalized `Scan` (sign, ASCII digit values, decimal point
//! position, explicit exponent) or nothing at all — malformed text is a
//! `None`, never an error. Underscore separators and Unicode digits are
//! folded away here so classification and parsing only ever see clean
//! digit sequences.

use super::unicode::digit_value;
use crate::policy::Policy;

/// A recognized special-value literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Special {
    Infinity,
    Nan,
}

/// The normalized result of scanning one piece of text.
///
/// The represented value is `0.digits × 10^(point + exp)`, negated when
/// `negative` — unless `special` is set, in which case the digit fields
/// are empty and meaningless.
#[derive(Clone, Debug)]
pub(crate) struct Scan {
    pub negative: bool,
    /// Mantissa digit values (0-9), integer and fractional parts
    /// concatenated, separators removed.
    pub digits: Vec<u8>,
    /// How many of `digits` sat before the decimal point.
    pub point: i64,
    /// Explicit exponent, zero when absent. Saturating: pathological
    /// exponents stay far outside any usable window.
    pub exp: i64,
    pub has_point: bool,
    pub has_exp: bool,
    pub special: Option<Special>,
}

impl Scan {
    fn special(negative: bool, special: Special) -> Self {
        Scan {
            negative,
            digits: Vec::new(),
            point: 0,
            exp: 0,
            has_point: false,
            has_exp: false,
            special: Some(special),
        }
    }

    /// Whether the text is written in floating form at all.
    pub fn has_float_syntax(&self) -> bool {
        self.has_point || self.has_exp || self.special.is_some()
    }

    /// True when every digit landing below the units place is zero.
    pub fn is_integral(&self) -> bool {
        if self.special.is_some() {
            return false;
        }
        // Digit i carries place exponent point + exp - 1 - i.
        let cutoff = self.point + self.exp;
        self.digits
            .iter()
            .enumerate()
            .all(|(i, &d)| (i as i64) < cutoff || d == 0)
    }

    /// Significant digit count with leading zeros excluded, minimum 1.
    pub fn significant_digits(&self) -> usize {
        let leading = self.digits.iter().take_while(|&&d| d == 0).count();
        (self.digits.len() - leading).max(1)
    }

    /// True when the mantissa is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.special.is_none() && self.digits.iter().all(|&d| d == 0)
    }

    /// Decimal exponent of the most significant nonzero digit, or `None`
    /// for a zero mantissa.
    pub fn magnitude_exponent(&self) -> Option<i64> {
        let leading = self.digits.iter().position(|&d| d != 0)?;
        Some(self.point + self.exp - 1 - leading as i64)
    }
}

/// Scan one piece of text under the given policy.
///
/// Returns `None` for anything that is not a complete, well-formed number:
/// leftover characters, bare signs, bare points, doubled signs or points,
/// misplaced separators, or an exponent marker with no digits.
pub(crate) fn scan_text(text: &str, policy: &Policy) -> Option<Scan> {
    let trimmed = if policy.allow_whitespace {
        text.trim()
    } else {
        text
    };
    if trimmed.is_empty() {
        return None;
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let mut pos = 0;

    let mut negative = false;
    if chars[pos] == '+' || chars[pos] == '-' {
        if !policy.allow_sign {
            return None;
        }
        negative = chars[pos] == '-';
        pos += 1;
    }

    if let Some(special) = match_special(&chars[pos..]) {
        if !policy.allow_special {
            return None;
        }
        return Some(Scan::special(negative, special));
    }

    let mut digits = Vec::new();
    consume_digit_run(&chars, &mut pos, &mut digits, policy);
    let point = digits.len() as i64;

    let mut has_point = false;
    if pos < chars.len() && chars[pos] == '.' {
        has_point = true;
        pos += 1;
        consume_digit_run(&chars, &mut pos, &mut digits, policy);
    }

    // Bare sign or bare point: a mantissa needs at least one digit.
    if digits.is_empty() {
        return None;
    }

    let mut has_exp = false;
    let mut exp: i64 = 0;
    if pos < chars.len() && (chars[pos] == 'e' || chars[pos] == 'E') {
        has_exp = true;
        pos += 1;
        let mut exp_negative = false;
        if pos < chars.len() && (chars[pos] == '+' || chars[pos] == '-') {
            exp_negative = chars[pos] == '-';
            pos += 1;
        }
        let mut exp_digits = Vec::new();
        consume_digit_run(&chars, &mut pos, &mut exp_digits, policy);
        if exp_digits.is_empty() {
            return None;
        }
        for d in exp_digits {
            exp = exp.saturating_mul(10).saturating_add(d as i64);
        }
        if exp_negative {
            exp = -exp;
        }
    }

    if pos != chars.len() {
        return None;
    }

    Some(Scan {
        negative,
        digits,
        point,
        exp,
        has_point,
        has_exp,
        special: None,
    })
}

/// Consume one run of digits, folding Unicode digits and skipping
/// underscores that sit strictly between two digits of the run.
fn consume_digit_run(chars: &[char], pos: &mut usize, out: &mut Vec<u8>, policy: &Policy) {
    let unicode = policy.allow_unicode_digits;
    let mut run_has_digit = false;
    while *pos < chars.len() {
        let c = chars[*pos];
        if let Some(d) = digit_value(c, unicode) {
            out.push(d);
            run_has_digit = true;
            *pos += 1;
        } else if c == '_'
            && policy.allow_underscores
            && run_has_digit
            && next_is_digit(chars, *pos + 1, unicode)
        {
            *pos += 1;
        } else {
            break;
        }
    }
}

fn next_is_digit(chars: &[char], pos: usize, unicode: bool) -> bool {
    chars
        .get(pos)
        .and_then(|&c| digit_value(c, unicode))
        .is_some()
}

fn match_special(rest: &[char]) -> Option<Special> {
    let matches_word = |word: &str| {
        rest.len() == word.len()
            && rest
                .iter()
                .zip(word.chars())
                .all(|(&c, w)| c.to_ascii_lowercase() == w)
    };
    if matches_word("inf") || matches_word("infinity") {
        Some(Special::Infinity)
    } else if matches_word("nan") {
        Some(Special::Nan)
    } else {
        None
    }
}
