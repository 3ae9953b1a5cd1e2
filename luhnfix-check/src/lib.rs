//! Reference forward Luhn checksum.
//!
//! This crate deliberately has no dependency on the rest of the workspace so
//! it can cross-check `luhnfix-invert` results without sharing any code with
//! the inversion math. It accepts digit strings of any non-zero length; the
//! 15/16-character PAN restriction is enforced by callers, not here.
//!
//! Non-digit policy: fail fast. [`luhn_sum`] returns `None` as soon as a
//! non-digit byte is seen, and [`is_valid`] maps that to `false`. Digits
//! processed before the bad byte never leak into a result.

/// The Luhn weighted digit sum, or `None` for an empty string or any
/// non-digit byte.
///
/// Walking from the last character to the first, digits at reversed-odd
/// positions (the check digit is the 1st) count unchanged; digits at
/// reversed-even positions are doubled, with 9 subtracted when the double
/// exceeds 9.
pub fn luhn_sum(pan: &str) -> Option<u32> {
    if pan.is_empty() {
        return None;
    }
    let mut sum = 0u32;
    for (i, b) in pan.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let d = u32::from(b - b'0');
        sum += if i % 2 == 0 {
            d
        } else {
            let doubled = d * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        };
    }
    Some(sum)
}

/// True iff `pan` is a non-empty digit string whose Luhn sum is divisible
/// by 10.
pub fn is_valid(pan: &str) -> bool {
    matches!(luhn_sum(pan), Some(sum) if sum % 10 == 0)
}
