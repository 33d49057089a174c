//! Best-pose selection and global ranking.
//!
//! Selection and ranking share one comparator per variant, so the final
//! table is ordered by exactly the key used to pick each file's pose:
//!
//! - basic: affinity ascending, intramol descending
//! - CNN:   cnn_affinity ascending, affinity ascending, intramol descending
//!
//! `mode` breaks full-key ties, making the order total. Both the per-file
//! reduction and the global sort are therefore invariant under permutation
//! of their input.

use crate::types::{BestPose, RankingTable, ScoreRecord, ScoreVariant};
use anyhow::Result;
use std::cmp::Ordering;
use std::path::Path;

/// Compare two records under the variant's tie-break key.
pub fn compare_records(a: &ScoreRecord, b: &ScoreRecord, variant: ScoreVariant) -> Ordering {
    let by_affinity = a.affinity.total_cmp(&b.affinity);
    // intramol is better when higher, so the comparison flips
    let by_intramol = b.intramol.total_cmp(&a.intramol);
    let by_mode = a.mode.cmp(&b.mode);

    match variant {
        ScoreVariant::Basic => by_affinity.then(by_intramol).then(by_mode),
        ScoreVariant::Cnn => {
            let cnn_a = a.cnn_affinity.unwrap_or(f64::INFINITY);
            let cnn_b = b.cnn_affinity.unwrap_or(f64::INFINITY);
            cnn_a
                .total_cmp(&cnn_b)
                .then(by_affinity)
                .then(by_intramol)
                .then(by_mode)
        }
    }
}

/// Pick the single best record of one report, or None if there are no rows.
///
/// Pure reduction over the slice; no side effects.
pub fn select_best_pose(records: &[ScoreRecord], variant: ScoreVariant) -> Option<ScoreRecord> {
    records
        .iter()
        .min_by(|a, b| compare_records(a, b, variant))
        .cloned()
}

/// Sort the collected best poses into the final ranking table.
///
/// Full-key ties across files fall back to the file name, so the table
/// never inherits directory enumeration order.
pub fn build_ranking(mut poses: Vec<BestPose>, variant: ScoreVariant) -> RankingTable {
    poses.sort_by(|a, b| {
        compare_records(&a.record, &b.record, variant).then_with(|| a.file.cmp(&b.file))
    });
    RankingTable {
        variant,
        entries: poses,
    }
}

/// Write the ranking table as a CSV artifact.
///
/// Header and column set follow the variant. Output is deterministic for
/// identical inputs: float fields use the shortest round-trip formatting.
pub fn write_ranking_csv<P: AsRef<Path>>(table: &RankingTable, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(table.variant.csv_header())?;

    for pose in &table.entries {
        let r = &pose.record;
        match table.variant {
            ScoreVariant::Basic => writer.write_record([
                r.mode.to_string(),
                r.affinity.to_string(),
                r.intramol.to_string(),
                pose.file.clone(),
            ])?,
            ScoreVariant::Cnn => writer.write_record([
                r.mode.to_string(),
                r.affinity.to_string(),
                r.intramol.to_string(),
                r.cnn_affinity.unwrap_or(f64::NAN).to_string(),
                pose.file.clone(),
            ])?,
        }
    }

    writer.flush()?;
    Ok(())
}
