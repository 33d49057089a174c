use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which flavor of score table a run handles.
///
/// The two flavors differ only in the row pattern (the CNN table carries an
/// extra predicted-affinity column) and the tie-break key, so one variant
/// switch replaces two near-identical pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoreVariant {
    #[default]
    Basic,
    Cnn,
}

impl ScoreVariant {
    /// Default output file name for this variant's ranking artifact.
    pub fn default_output(&self) -> &'static str {
        match self {
            ScoreVariant::Basic => "global_ranking.csv",
            ScoreVariant::Cnn => "global_ranking_cnn.csv",
        }
    }

    /// CSV header row for the ranking artifact.
    pub fn csv_header(&self) -> &'static [&'static str] {
        match self {
            ScoreVariant::Basic => &["mode", "affinity", "intramol", "file"],
            ScoreVariant::Cnn => &["mode", "affinity", "intramol", "cnn_affinity", "file"],
        }
    }
}

/// One parsed row of a docking score table.
///
/// `affinity` is the predicted binding energy in kcal/mol (lower is better),
/// `intramol` the intramolecular energy term (higher is better).
/// `cnn_affinity` is only present for CNN-rescored tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub mode: u32,
    pub affinity: f64,
    pub intramol: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnn_affinity: Option<f64>,
}

/// The representative record of one report file, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPose {
    #[serde(flatten)]
    pub record: ScoreRecord,
    pub file: String,
}

/// The final ranking across all report files.
///
/// Entries are totally ordered by the variant's tie-break key (mode breaks
/// full-key ties), so the table never depends on directory enumeration order.
/// Built once per run and written out as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingTable {
    pub variant: ScoreVariant,
    pub entries: Vec<BestPose>,
}

/// Outcome of running the Lipinski rules against one SMILES string.
///
/// `reasons` holds one message per rule, pass messages first, in rule order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoleculeEvaluation {
    pub smiles: String,
    pub passed: bool,
    pub reasons: Vec<String>,
}

/// Aggregate counters for one ranking run. Optionally written out as a JSON
/// summary artifact; kept out of the CSV so reruns stay byte-identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub created_at: DateTime<Utc>,
    pub variant: ScoreVariant,
    /// Number of `.txt` files seen in the reports directory
    pub reports_scanned: usize,
    /// Number of files that contributed a best pose
    pub reports_ranked: usize,
    /// Total score rows parsed across all files
    pub rows_parsed: usize,
}

impl RunSummary {
    pub fn new(variant: ScoreVariant) -> Self {
        Self {
            created_at: Utc::now(),
            variant,
            reports_scanned: 0,
            reports_ranked: 0,
            rows_parsed: 0,
        }
    }
}
