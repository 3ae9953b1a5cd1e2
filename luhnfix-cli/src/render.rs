//! Plain-text rendering of check and repair results.

use luhnfix_types::report::{CheckRecord, Outcome, PanRecord};
use std::fmt::Write;

pub fn check_text(records: &[CheckRecord]) -> String {
    let mut out = String::new();
    for r in records {
        let verdict = if r.valid { "passed" } else { "not passed" };
        let _ = writeln!(out, "pan {}: luhn check {}", r.pan, verdict);
    }
    out
}

pub fn repair_text(records: &[PanRecord]) -> String {
    let mut out = String::new();
    for r in records {
        match r {
            PanRecord::Skipped { pan, reason } => {
                let _ = writeln!(out, "pan {}: skipped ({})", pan, reason);
            }
            PanRecord::AlreadyValid { pan } => {
                let _ = writeln!(out, "pan {}: luhn check passed, nothing to repair", pan);
            }
            PanRecord::Repairable { pan, positions } => {
                let _ = writeln!(out, "pan {}: luhn check not passed", pan);
                for p in positions {
                    match &p.outcome {
                        Outcome::Digit {
                            digit,
                            altered_pan,
                            revalidated,
                        } => {
                            let recheck = if *revalidated { "passed" } else { "not passed" };
                            let _ = writeln!(
                                out,
                                "  position {}: digit {} -> {} (recheck: {})",
                                p.position, digit, altered_pan, recheck
                            );
                        }
                        Outcome::Error { kind, code } => {
                            let _ = writeln!(out, "  position {}: {} ({})", p.position, kind, code);
                        }
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{check_text, repair_text};
    use luhnfix_types::report::{CheckRecord, Outcome, PanRecord, PositionOutcome};

    #[test]
    fn check_lines_name_the_verdict() {
        let rendered = check_text(&[
            CheckRecord {
                pan: "1234567812345670".to_string(),
                valid: true,
            },
            CheckRecord {
                pan: "1234567812345678".to_string(),
                valid: false,
            },
        ]);
        assert!(rendered.contains("pan 1234567812345670: luhn check passed"));
        assert!(rendered.contains("pan 1234567812345678: luhn check not passed"));
    }

    #[test]
    fn repair_lines_cover_all_outcome_shapes() {
        let rendered = repair_text(&[PanRecord::Repairable {
            pan: "1234567812345678".to_string(),
            positions: vec![
                PositionOutcome {
                    position: 0,
                    outcome: Outcome::Digit {
                        digit: '2',
                        altered_pan: "2234567812345678".to_string(),
                        revalidated: true,
                    },
                },
                PositionOutcome {
                    position: 4,
                    outcome: Outcome::Error {
                        kind: "UNSOLVABLE".to_string(),
                        code: -2,
                    },
                },
            ],
        }]);
        assert!(rendered.contains("position 0: digit 2 -> 2234567812345678 (recheck: passed)"));
        assert!(rendered.contains("position 4: UNSOLVABLE (-2)"));
    }

    #[test]
    fn skipped_line_carries_the_reason() {
        let rendered = repair_text(&[PanRecord::Skipped {
            pan: "1234".to_string(),
            reason: "pan must be 15 or 16 characters, got 4".to_string(),
        }]);
        assert!(rendered.contains("pan 1234: skipped"));
        assert!(rendered.contains("got 4"));
    }
}
