// Dockrank Core Library
//
// Aggregates molecular docking score reports into a global best-pose
// ranking, and filters molecules with Lipinski's rule of five.
// Main interface for the dockrank CLI.

pub mod chem;
pub mod config;
pub mod ranking;
pub mod report;
pub mod types;

// Re-export main types and functions for easy use
pub use chem::{evaluate_batch, lipinski_pass, lipinski_trial, parse_smiles, SmilesError};
pub use config::RankingConfig;
pub use ranking::{build_ranking, select_best_pose, write_ranking_csv};
pub use report::{parse_score_table, scan_reports};
pub use types::*;
