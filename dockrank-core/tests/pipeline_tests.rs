//! Pipeline boundary tests.
//!
//! These build small report directories and SMILES tables on disk, run the
//! full scan → select → rank → write path (and the Lipinski batch path),
//! and assert on the artifacts at the output boundary:
//!
//! - ranking CSV content, column set and ordering
//! - byte-for-byte determinism across reruns
//! - the empty-directory "no results" contract
//! - passing-SMILES output of the rule evaluator

use dockrank_core::chem::lipinski::{read_smiles_column, write_passing_smiles};
use dockrank_core::{
    build_ranking, evaluate_batch, scan_reports, write_ranking_csv, ScoreVariant,
};
use std::fs;
use std::path::Path;

// ============================================================================
// Fixture helpers
// ============================================================================

fn write_report(dir: &Path, name: &str, rows: &str) {
    let body = format!(
        "AutoDock scoring run\nmode |  affinity | intramol\n-----+-----------+---------\n{rows}"
    );
    fs::write(dir.join(name), body).unwrap();
}

fn run_ranking(dir: &Path, variant: ScoreVariant, output: &Path) {
    let (poses, _) = scan_reports(dir, variant).unwrap();
    let table = build_ranking(poses, variant);
    write_ranking_csv(&table, output).unwrap();
}

// ============================================================================
// Ranking pipeline
// ============================================================================

mod ranking_pipeline {
    use super::*;

    #[test]
    fn basic_ranking_artifact_matches_expected_rows() {
        let tmp = tempfile::tempdir().unwrap();
        write_report(tmp.path(), "lig_a.txt", "   1   -7.2   0.0\n   2   -8.5   0.3\n");
        write_report(tmp.path(), "lig_b.txt", "   1   -6.05   0.12\n");

        let output = tmp.path().join("global_ranking.csv");
        run_ranking(tmp.path(), ScoreVariant::Basic, &output);

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "mode,affinity,intramol,file\n\
             2,-8.5,0.3,lig_a.txt\n\
             1,-6.05,0.12,lig_b.txt\n"
        );
    }

    #[test]
    fn cnn_ranking_orders_by_cnn_affinity_first() {
        let tmp = tempfile::tempdir().unwrap();
        // lig_x has the better raw affinity, lig_y the better CNN affinity
        write_report(
            tmp.path(),
            "lig_x.txt",
            "   1   -7.3   0.1    0.90    -6.5\n   2   -7.5   0.2    0.80    -5.9\n",
        );
        write_report(tmp.path(), "lig_y.txt", "   1   -6.1   0.05    0.70    -7.2\n");

        let output = tmp.path().join("global_ranking_cnn.csv");
        run_ranking(tmp.path(), ScoreVariant::Cnn, &output);

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "mode,affinity,intramol,cnn_affinity,file\n\
             1,-6.1,0.05,-7.2,lig_y.txt\n\
             1,-7.3,0.1,-6.5,lig_x.txt\n"
        );
    }

    #[test]
    fn rerun_is_byte_identical() {
        let tmp = tempfile::tempdir().unwrap();
        write_report(tmp.path(), "lig_a.txt", "   1   -7.2   0.0\n   2   -8.5   0.3\n");
        write_report(tmp.path(), "lig_b.txt", "   1   -6.05   0.12\n");

        let first = tmp.path().join("first.csv");
        let second = tmp.path().join("second.csv");
        run_ranking(tmp.path(), ScoreVariant::Basic, &first);
        run_ranking(tmp.path(), ScoreVariant::Basic, &second);

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn empty_directory_yields_no_poses() {
        let tmp = tempfile::tempdir().unwrap();
        let (poses, summary) = scan_reports(tmp.path(), ScoreVariant::Basic).unwrap();
        assert!(poses.is_empty());
        assert_eq!(summary.reports_scanned, 0);
        // the CLI prints the "no results" notice and writes no artifact
    }

    #[test]
    fn tableless_reports_are_omitted_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write_report(tmp.path(), "good.txt", "   1   -5.5   0.2\n");
        fs::write(tmp.path().join("garbage.txt"), "no table here\n").unwrap();

        let output = tmp.path().join("ranking.csv");
        run_ranking(tmp.path(), ScoreVariant::Basic, &output);

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "mode,affinity,intramol,file\n1,-5.5,0.2,good.txt\n");
    }
}

// ============================================================================
// Lipinski pipeline
// ============================================================================

mod lipinski_pipeline {
    use super::*;

    #[test]
    fn passing_smiles_survive_the_filter() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("molecules.csv");
        let output = tmp.path().join("result_lipinski.csv");
        // ethanol passes; tetraiodobenzene fails on weight; the broken entry
        // is recorded as failed, not fatal
        fs::write(
            &input,
            "name,smiles\nethanol,CCO\nheavy,Ic1cc(I)c(I)cc1I\nbroken,C(C\n",
        )
        .unwrap();

        let smiles = read_smiles_column(&input).unwrap();
        assert_eq!(smiles.len(), 3);

        let evaluations = evaluate_batch(&smiles);
        assert_eq!(evaluations.len(), 3);
        write_passing_smiles(&evaluations, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "CCO\n");
    }

    #[test]
    fn headerless_table_falls_back_to_first_column() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("plain.csv");
        let output = tmp.path().join("out.csv");
        fs::write(&input, "CCO\nc1ccccc1\n").unwrap();

        let smiles = read_smiles_column(&input).unwrap();
        let evaluations = evaluate_batch(&smiles);
        write_passing_smiles(&evaluations, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "CCO\nc1ccccc1\n");
    }
}
