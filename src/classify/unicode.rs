//! Unicode decimal digit folding.
//!
//! The scanner normalizes any Unicode decimal digit to its ASCII digit
//! value before it is counted, when the policy enables it. Coverage is the
//! decimal-digit (`Nd`) blocks that appear in real-world numeric text; each
//! block is represented by the code point of its zero.

use once_cell::sync::Lazy;

/// Zero code points of supported decimal-digit blocks, sorted ascending.
static DIGIT_ZERO_POINTS: Lazy<Vec<u32>> = Lazy::new(|| {
    let mut zeros = vec![
        0x0030,  // ASCII
        0x0660,  // Arabic-Indic
        0x06F0,  // Extended Arabic-Indic
        0x0966,  // Devanagari
        0x09E6,  // Bengali
        0x0A66,  // Gurmukhi
        0x0AE6,  // Gujarati
        0x0B66,  // Oriya
        0x0BE6,  // Tamil
        0x0C66,  // Telugu
        0x0CE6,  // Kannada
        0x0D66,  // Malayalam
        0x0E50,  // Thai
        0x0ED0,  // Lao
        0x0F20,  // Tibetan
        0x1040,  // Myanmar
        0x17E0,  // Khmer
        0x1810,  // Mongolian
        0xFF10,  // Fullwidth
    ];
    zeros.sort_unstable();
    zeros
});

/// The decimal value of `c`, honoring the policy's Unicode setting.
///
/// ASCII digits always fold; other blocks fold only when `unicode` is set.
pub(crate) fn digit_value(c: char, unicode: bool) -> Option<u8> {
    if c.is_ascii_digit() {
        return Some(c as u8 - b'0');
    }
    if !unicode || c.is_ascii() {
        return None;
    }
    let cp = c as u32;
    let zeros = &*DIGIT_ZERO_POINTS;
    let idx = match zeros.binary_search(&cp) {
        Ok(i) => i,
        Err(0) => return None,
        Err(i) => i - 1,
    };
    let offset = cp - zeros[idx];
    if offset < 10 {
        Some(offset as u8)
    } else {
        None
    }
}
