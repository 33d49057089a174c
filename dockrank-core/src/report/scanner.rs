//! Report directory scanner and best-pose aggregator.
//!
//! Walks a configured directory, parses every `*.txt` report and reduces
//! each to its best pose. Enumeration order is irrelevant: the ranking step
//! re-sorts everything under the variant key.

use crate::ranking::select_best_pose;
use crate::report::table_parser::parse_score_table;
use crate::types::{BestPose, RunSummary, ScoreVariant};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Scan `dir` for `*.txt` reports and collect one best pose per file.
///
/// Files with no parseable score rows contribute nothing (not an error).
/// Individual unreadable files are warned about and skipped; a missing or
/// unreadable directory fails the run.
pub fn scan_reports<P: AsRef<Path>>(
    dir: P,
    variant: ScoreVariant,
) -> Result<(Vec<BestPose>, RunSummary)> {
    let dir = dir.as_ref();
    let mut summary = RunSummary::new(variant);
    let mut poses = Vec::new();

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read reports directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if name.ends_with(".txt") => name.to_string(),
            _ => continue,
        };

        summary.reports_scanned += 1;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("⚠️  Skipping unreadable report {}: {}", path.display(), e);
                continue;
            }
        };

        let records = parse_score_table(&content, variant);
        summary.rows_parsed += records.len();

        if let Some(record) = select_best_pose(&records, variant) {
            summary.reports_ranked += 1;
            poses.push(BestPose {
                record,
                file: file_name,
            });
        }
    }

    Ok((poses, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_report(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_scan_collects_one_pose_per_report() {
        let tmp = tempfile::tempdir().unwrap();
        write_report(
            tmp.path(),
            "lig_a.txt",
            "-----+----\n   1   -7.2   0.0\n   2   -8.5   0.3\n",
        );
        write_report(tmp.path(), "lig_b.txt", "-----+----\n   1   -6.0   0.1\n");
        // Non-txt files are ignored entirely
        write_report(tmp.path(), "notes.md", "-----+----\n   1   -9.9   0.0\n");

        let (poses, summary) = scan_reports(tmp.path(), ScoreVariant::Basic).unwrap();
        assert_eq!(poses.len(), 2);
        assert_eq!(summary.reports_scanned, 2);
        assert_eq!(summary.reports_ranked, 2);
        assert_eq!(summary.rows_parsed, 3);

        let a = poses.iter().find(|p| p.file == "lig_a.txt").unwrap();
        assert_eq!(a.record.mode, 2);
    }

    #[test]
    fn test_rowless_report_omitted_without_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_report(tmp.path(), "empty.txt", "no table in here\n");

        let (poses, summary) = scan_reports(tmp.path(), ScoreVariant::Basic).unwrap();
        assert!(poses.is_empty());
        assert_eq!(summary.reports_scanned, 1);
        assert_eq!(summary.reports_ranked, 0);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = scan_reports("/definitely/not/a/dir", ScoreVariant::Basic);
        assert!(result.is_err());
    }
}
