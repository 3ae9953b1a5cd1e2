//! Serializable report DTOs emitted by the `luhnfix` driver.

use serde::{Deserialize, Serialize};

/// Top-level repair report (`luhnfix.report.v1`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairReport {
    pub schema: String,
    pub records: Vec<PanRecord>,
}

/// Outcome for one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PanRecord {
    /// Input was not a 15- or 16-character string; not processed.
    Skipped { pan: String, reason: String },
    /// The PAN already satisfies the checksum; nothing to repair.
    AlreadyValid { pan: String },
    /// The PAN fails the checksum; one entry per attempted position.
    Repairable {
        pan: String,
        positions: Vec<PositionOutcome>,
    },
}

/// Result of attempting one target position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionOutcome {
    pub position: usize,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Either a replacement digit or a named error kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Digit {
        digit: char,
        altered_pan: String,
        revalidated: bool,
    },
    Error {
        kind: String,
        code: i8,
    },
}

/// One line of `luhnfix check` output in JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub pan: String,
    pub valid: bool,
}
