//! Closed-form single-digit inversion of the Luhn checksum.
//!
//! Given a PAN that fails the checksum and a target position, [`invert`]
//! computes the one replacement digit at that position that makes the PAN
//! pass, with every other digit held fixed. There is no search: the Luhn sum
//! of the non-target digits determines the required residue directly.
//!
//! The checksum terms are computed here from scratch rather than shared with
//! `luhnfix-check`; the two crates stay independent so either one can vouch
//! for the other in tests.
//!
//! Solvability is asymmetric between the two parities. A target at a
//! reversed-odd position (counting the check digit as the 1st) contributes
//! its value unchanged, so any required residue 0-9 is reachable. A target at
//! a reversed-even position contributes through the doubling transform, and
//! only even residues are accepted for it: an odd residue is reported as
//! [`InvertError::Unsolvable`]. This parity rule is part of the published
//! contract of the algorithm and is pinned by the test suite.

mod error;

pub use error::{InvertError, InvertResult};

use luhnfix_types::Pan;
use tracing::debug;

/// Knobs for [`invert`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvertOptions {
    /// Permit targeting the trailing check digit itself.
    ///
    /// Nothing in the math forbids it (the check digit sits at a
    /// reversed-odd position, so it is always solvable), but by convention
    /// drivers only alter significant digits. Off by default.
    pub allow_check_digit: bool,
}

/// Luhn contribution of a digit at a reversed-even position: double it and
/// subtract 9 when the double exceeds 9.
const DOUBLED: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Compute the replacement digit at `position` that makes `pan` pass the
/// Luhn check, as an ASCII digit byte.
///
/// `position` is zero-based from the most-significant character. The legal
/// target range is `0..=pan.len() - 2`, widened to include the check digit
/// when [`InvertOptions::allow_check_digit`] is set.
pub fn invert(pan: &Pan, position: usize, opts: &InvertOptions) -> InvertResult<u8> {
    let len = pan.len();
    let last_target = if opts.allow_check_digit {
        len - 1
    } else {
        len - 2
    };
    if position > last_target {
        return Err(InvertError::InvalidPosition { position, len });
    }

    let bytes = pan.bytes();
    let mut sum: u32 = 0;
    // The trailing check digit is reversed-position 0, "odd" in the
    // 1-indexed Luhn sense; parity flips every step walking leftward.
    let mut odd = true;
    let mut position_odd = true;
    for i in (0..len).rev() {
        if i == position {
            position_odd = odd;
        } else {
            let b = bytes[i];
            if !b.is_ascii_digit() {
                return Err(InvertError::InvalidDigit { byte: b, position: i });
            }
            let digit = u32::from(b - b'0');
            sum += if odd { digit } else { DOUBLED[digit as usize] };
        }
        odd = !odd;
    }

    // (sum * 9) % 10 equals (10 - sum % 10) % 10 without the extra case for
    // sum % 10 == 0.
    let residue = (sum * 9) % 10;
    debug!(position, position_odd, residue, "closed-form inversion");

    if position_odd {
        return Ok(b'0' + residue as u8);
    }
    if residue % 2 != 0 {
        return Err(InvertError::Unsolvable { residue });
    }
    // Inverse of the doubling transform for the accepted (even) residues:
    // 0,2,4,6,8 come from digits 0,1,2,3,4.
    Ok(b'0' + (residue / 2) as u8)
}
