//! Docking score table parser.
//!
//! Docking reports are plain text: a preamble of log output, then a
//! separator line whose trimmed content starts with `-----+`, then one
//! whitespace-delimited score row per pose:
//!
//! ```text
//! mode |  affinity | intramol  | ... |  cnn_affinity
//! -----+-----------+-----------+-----+--------------
//!    1     -7.215      0.031     ...      -6.902
//! ```
//!
//! Everything before the separator is ignored. After it, a line whose
//! trimmed content starts with a decimal digit is a candidate row; rows
//! that do not match the numeric pattern are skipped silently.

use crate::types::{ScoreRecord, ScoreVariant};
use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled row patterns, fixed-position numeric fields
static BASIC_ROW_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)").unwrap());

// The CNN table carries an intervening text column before the CNN-predicted
// affinity, hence the `.+` between the third and fourth numeric field.
static CNN_ROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)\s+.+\s+(-?\d+\.\d+)").unwrap()
});

/// Marker for the start of the score table.
fn is_table_separator(line: &str) -> bool {
    line.trim().starts_with("-----+")
}

/// Candidate data rows start with a digit after leading whitespace.
fn is_candidate_row(line: &str) -> bool {
    line.trim_start().starts_with(|c: char| c.is_ascii_digit())
}

/// Parse one candidate row into a ScoreRecord, or None if the pattern or a
/// numeric conversion fails.
fn parse_row(line: &str, variant: ScoreVariant) -> Option<ScoreRecord> {
    match variant {
        ScoreVariant::Basic => {
            let caps = BASIC_ROW_REGEX.captures(line)?;
            Some(ScoreRecord {
                mode: caps[1].parse().ok()?,
                affinity: caps[2].parse().ok()?,
                intramol: caps[3].parse().ok()?,
                cnn_affinity: None,
            })
        }
        ScoreVariant::Cnn => {
            let caps = CNN_ROW_REGEX.captures(line)?;
            Some(ScoreRecord {
                mode: caps[1].parse().ok()?,
                affinity: caps[2].parse().ok()?,
                intramol: caps[3].parse().ok()?,
                cnn_affinity: Some(caps[4].parse().ok()?),
            })
        }
    }
}

/// Extract all score rows from a report's text, in file order.
///
/// Single pass over the lines; malformed rows are dropped, never fatal.
pub fn parse_score_table(content: &str, variant: ScoreVariant) -> Vec<ScoreRecord> {
    let mut records = Vec::new();
    let mut in_table = false;

    for line in content.lines() {
        if is_table_separator(line) {
            in_table = true;
            continue;
        }
        if in_table && is_candidate_row(line) {
            if let Some(record) = parse_row(line, variant) {
                records.push(record);
            }
        }
    }

    records
}
