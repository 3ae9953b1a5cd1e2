use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Total characters in the longest supported PAN: 15 significant digits plus
/// the trailing check digit.
pub const MAX_PAN_LEN: usize = 16;

/// Total characters in the shortest supported PAN: 14 significant digits plus
/// the trailing check digit.
pub const MIN_PAN_LEN: usize = 15;

/// A Primary Account Number: a bounded run of ASCII characters with the check
/// digit in the trailing position.
///
/// Length is carried explicitly; there is no terminator convention. The
/// constructor enforces length only. Digit-ness of individual characters is a
/// property the algorithms verify themselves, so a malformed character is
/// reported as a data error by the consumer rather than rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pan {
    buf: [u8; MAX_PAN_LEN],
    len: usize,
}

/// Errors from [`Pan::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PanParseError {
    /// The input was not 15 or 16 characters long.
    #[error("pan must be {MIN_PAN_LEN} or {MAX_PAN_LEN} characters, got {len}")]
    Length { len: usize },
}

impl Pan {
    /// Parse a PAN from a string, enforcing the supported lengths.
    pub fn parse(s: &str) -> Result<Self, PanParseError> {
        let bytes = s.as_bytes();
        if !(MIN_PAN_LEN..=MAX_PAN_LEN).contains(&bytes.len()) {
            return Err(PanParseError::Length { len: bytes.len() });
        }
        let mut buf = [0u8; MAX_PAN_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            buf,
            len: bytes.len(),
        })
    }

    /// Total character count, check digit included (15 or 16).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a constructed PAN has at least 15 characters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the trailing check digit.
    pub fn check_digit_index(&self) -> usize {
        self.len - 1
    }

    /// The PAN characters as raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// A copy of this PAN with the character at `position` replaced.
    ///
    /// Returns `None` when `position` is out of range.
    pub fn with_byte_at(&self, position: usize, byte: u8) -> Option<Self> {
        if position >= self.len {
            return None;
        }
        let mut out = *self;
        out.buf[position] = byte;
        Some(out)
    }
}

impl FromStr for Pan {
    type Err = PanParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pan::parse(s)
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bytes() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
