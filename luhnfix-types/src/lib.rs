//! Shared types for the luhnfix workspace.
//!
//! # Design constraints
//! - `Pan` carries an explicit length instead of a sentinel terminator, so
//!   14- and 15-digit PANs are distinguished without probing the buffer.
//! - Report types are intended to be serialized; be conservative with
//!   breaking changes and prefer adding optional fields.

pub mod pan;
pub mod report;

pub use pan::{Pan, PanParseError, MAX_PAN_LEN, MIN_PAN_LEN};

/// Schema identifiers.
pub mod schema {
    pub const LUHNFIX_REPORT_V1: &str = "luhnfix.report.v1";
}
