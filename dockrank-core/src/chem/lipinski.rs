//! Lipinski rule-of-five evaluation.
//!
//! Four independent threshold rules predict oral drug-likeness:
//! H-bond donors ≤ 5, H-bond acceptors ≤ 10, molecular weight < 500,
//! logP < 5. Every rule produces one message — pass or fail — with the
//! measured value embedded, so a trial always carries four messages total.

use crate::chem::descriptors::{h_bond_acceptors, h_bond_donors, log_p, molecular_weight};
use crate::chem::smiles::{parse_smiles, SmilesError};
use crate::types::MoleculeEvaluation;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Outcome of running the four rules against one molecule.
#[derive(Debug, Clone)]
pub struct LipinskiTrial {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl LipinskiTrial {
    pub fn is_pass(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run all four Lipinski rules against a SMILES string.
///
/// Returns both message lists; a molecule accumulates one message per rule
/// regardless of outcome. Invalid SMILES fail with the domain error.
pub fn lipinski_trial(smiles: &str) -> Result<LipinskiTrial, SmilesError> {
    let mol = parse_smiles(smiles)?;

    let num_hdonors = h_bond_donors(&mol);
    let num_hacceptors = h_bond_acceptors(&mol);
    let mol_weight = molecular_weight(&mol);
    let mol_logp = log_p(&mol);

    let mut passed = Vec::new();
    let mut failed = Vec::new();

    if num_hdonors > 5 {
        failed.push(format!("Over 5 H-bond donors, found {num_hdonors}"));
    } else {
        passed.push(format!("Found {num_hdonors} H-bond donors"));
    }

    if num_hacceptors > 10 {
        failed.push(format!("Over 10 H-bond acceptors, found {num_hacceptors}"));
    } else {
        passed.push(format!("Found {num_hacceptors} H-bond acceptors"));
    }

    if mol_weight >= 500.0 {
        failed.push(format!("Molecular weight over 500, calculated {mol_weight:.3}"));
    } else {
        passed.push(format!("Molecular weight: {mol_weight:.3}"));
    }

    if mol_logp >= 5.0 {
        failed.push(format!(
            "Log partition coefficient over 5, calculated {mol_logp:.3}"
        ));
    } else {
        passed.push(format!("Log partition coefficient: {mol_logp:.3}"));
    }

    Ok(LipinskiTrial { passed, failed })
}

/// Boolean reduction of `lipinski_trial`: true iff no rule failed.
pub fn lipinski_pass(smiles: &str) -> Result<bool, SmilesError> {
    Ok(lipinski_trial(smiles)?.is_pass())
}

/// Evaluate a batch of SMILES strings.
///
/// Entries that are blank after trimming are skipped. An invalid SMILES is
/// reported with a warning and recorded as a failed evaluation instead of
/// aborting the batch.
pub fn evaluate_batch<I, S>(entries: I) -> Vec<MoleculeEvaluation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut evaluations = Vec::new();

    for entry in entries {
        let smiles = entry.as_ref().trim();
        if smiles.is_empty() {
            continue;
        }

        match lipinski_trial(smiles) {
            Ok(trial) => {
                let passed = trial.is_pass();
                let mut reasons = trial.passed;
                reasons.extend(trial.failed);
                evaluations.push(MoleculeEvaluation {
                    smiles: smiles.to_string(),
                    passed,
                    reasons,
                });
            }
            Err(e) => {
                eprintln!("⚠️  Skipping invalid SMILES '{smiles}': {e}");
                evaluations.push(MoleculeEvaluation {
                    smiles: smiles.to_string(),
                    passed: false,
                    reasons: vec![format!("Invalid SMILES: {e}")],
                });
            }
        }
    }

    evaluations
}

/// Read the SMILES column of a tabular input file.
///
/// The column named `smiles` is matched case-insensitively. Without one,
/// the first column is used — header cell included, matching the original
/// headerless fallback — after a printed warning.
pub fn read_smiles_column<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Could not read file {}", path.display()))?;

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("The input file {} is not a valid CSV", path.display()))?;

    if records.is_empty() {
        bail!("The input file {} is empty", path.display());
    }

    let header = &records[0];
    if let Some(idx) = header
        .iter()
        .position(|cell| cell.trim().eq_ignore_ascii_case("smiles"))
    {
        Ok(records[1..]
            .iter()
            .filter_map(|r| r.get(idx))
            .map(str::to_string)
            .collect())
    } else {
        eprintln!("⚠️  The input file does not contain a 'smiles' column. Using the first column as 'smiles'.");
        Ok(records
            .iter()
            .filter_map(|r| r.get(0))
            .map(str::to_string)
            .collect())
    }
}

/// Write the SMILES strings of passing evaluations, one per line, no header.
pub fn write_passing_smiles<P: AsRef<Path>>(
    evaluations: &[MoleculeEvaluation],
    path: P,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for eval in evaluations.iter().filter(|e| e.passed) {
        writer.write_record([eval.smiles.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethanol_passes_all_four_rules() {
        let trial = lipinski_trial("CCO").unwrap();
        assert!(trial.is_pass());
        assert_eq!(trial.passed.len(), 4);
        assert!(trial.failed.is_empty());
        assert_eq!(trial.passed[0], "Found 1 H-bond donors");
        assert_eq!(trial.passed[1], "Found 1 H-bond acceptors");
        assert!(lipinski_pass("CCO").unwrap());
    }

    #[test]
    fn test_heavy_molecule_fails_weight_rule_only() {
        // 1,2,4,5-tetraiodobenzene is over 500 Da but clean on the other rules
        let trial = lipinski_trial("Ic1cc(I)c(I)cc1I").unwrap();
        assert!(!trial.is_pass());
        assert_eq!(trial.failed.len(), 1);
        assert_eq!(trial.passed.len(), 3);
        assert!(trial.failed[0].starts_with("Molecular weight over 500"));
        assert!(!lipinski_pass("Ic1cc(I)c(I)cc1I").unwrap());
    }

    #[test]
    fn test_invalid_smiles_is_a_domain_error() {
        assert!(lipinski_trial("not a molecule").is_err());
        assert!(lipinski_pass("").is_err());
    }

    #[test]
    fn test_batch_skips_blank_and_survives_invalid_entries() {
        let evals = evaluate_batch(["CCO", "   ", "C(C", "c1ccccc1"]);
        assert_eq!(evals.len(), 3);
        assert!(evals[0].passed);
        assert_eq!(evals[1].smiles, "C(C");
        assert!(!evals[1].passed);
        assert!(evals[1].reasons[0].starts_with("Invalid SMILES"));
        assert!(evals[2].passed);
    }

    #[test]
    fn test_batch_reasons_hold_one_message_per_rule() {
        let evals = evaluate_batch(["CCO"]);
        assert_eq!(evals[0].reasons.len(), 4);
    }

    #[test]
    fn test_smiles_column_found_case_insensitively() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in.csv");
        std::fs::write(&input, "id,SMILES\n1,CCO\n2,c1ccccc1\n").unwrap();
        let smiles = read_smiles_column(&input).unwrap();
        assert_eq!(smiles, vec!["CCO", "c1ccccc1"]);
    }

    #[test]
    fn test_missing_smiles_column_falls_back_to_first() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in.csv");
        std::fs::write(&input, "CCO\nCCC\n").unwrap();
        let smiles = read_smiles_column(&input).unwrap();
        assert_eq!(smiles, vec!["CCO", "CCC"]);
    }

    #[test]
    fn test_empty_input_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("empty.csv");
        std::fs::write(&input, "").unwrap();
        assert!(read_smiles_column(&input).is_err());
    }

    #[test]
    fn test_write_passing_smiles_only() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("out.csv");
        let evals = evaluate_batch(["CCO", "Ic1cc(I)c(I)cc1I"]);
        write_passing_smiles(&evals, &output).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "CCO\n");
    }
}
