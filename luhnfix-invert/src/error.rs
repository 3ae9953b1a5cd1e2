//! Error types for luhnfix-invert.
//!
//! All three kinds are ordinary result values: `Unsolvable` in particular is
//! a legitimate mathematical outcome of the checksum, not a failure of the
//! caller or the library, and callers are expected to keep processing other
//! positions after seeing it.

use thiserror::Error;

/// Why a position could not be assigned a replacement digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvertError {
    /// The target index is outside the alterable range of the PAN.
    #[error("position {position} is not an alterable digit of a {len}-character pan")]
    InvalidPosition { position: usize, len: usize },

    /// A non-target character was not an ASCII digit.
    #[error("byte {byte:#04x} at position {position} is not an ascii digit")]
    InvalidDigit { byte: u8, position: usize },

    /// The checksum equation has no digit solution at this position.
    #[error("no digit satisfies the checksum at this position (required residue {residue})")]
    Unsolvable { residue: u32 },
}

impl InvertError {
    /// Small negative code for driver-facing output.
    pub fn code(&self) -> i8 {
        match self {
            InvertError::InvalidPosition { .. } => -1,
            InvertError::Unsolvable { .. } => -2,
            InvertError::InvalidDigit { .. } => -3,
        }
    }

    /// Stable upper-case name for driver-facing output.
    pub fn kind(&self) -> &'static str {
        match self {
            InvertError::InvalidPosition { .. } => "INVALID_POSITION",
            InvertError::Unsolvable { .. } => "UNSOLVABLE",
            InvertError::InvalidDigit { .. } => "INVALID_DIGIT",
        }
    }
}

/// Result type alias using InvertError.
pub type InvertResult<T> = Result<T, InvertError>;

#[cfg(test)]
mod tests {
    use super::InvertError;

    #[test]
    fn codes_are_distinct_small_negatives() {
        let errs = [
            InvertError::InvalidPosition { position: 20, len: 16 },
            InvertError::Unsolvable { residue: 3 },
            InvertError::InvalidDigit { byte: b'x', position: 4 },
        ];
        assert_eq!(errs.map(|e| e.code()), [-1, -2, -3]);
    }

    #[test]
    fn kinds_match_driver_vocabulary() {
        assert_eq!(
            InvertError::InvalidPosition { position: 0, len: 16 }.kind(),
            "INVALID_POSITION"
        );
        assert_eq!(InvertError::Unsolvable { residue: 1 }.kind(), "UNSOLVABLE");
        assert_eq!(
            InvertError::InvalidDigit { byte: 0, position: 0 }.kind(),
            "INVALID_DIGIT"
        );
    }

    #[test]
    fn display_names_the_offending_input() {
        let err = InvertError::InvalidDigit { byte: b'x', position: 3 };
        let msg = err.to_string();
        assert!(msg.contains("0x78"));
        assert!(msg.contains("position 3"));
    }
}
