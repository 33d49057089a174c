use crate::types::ScoreVariant;
use anyhow::Result;
use serde::{Deserialize, Serialize};

// Default value functions for serde
fn default_reports_dir() -> String {
    ".".to_string()
}

/// Configuration for one ranking run.
///
/// Replaces the implicit working-directory assumption of older tooling with
/// an explicit reports directory scoped to a single invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Directory holding the `*.txt` docking report files
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
    /// Score table flavor (selects row pattern, tie-break key and header)
    #[serde(default)]
    pub variant: ScoreVariant,
    /// Ranking artifact path; None uses the variant's default file name
    #[serde(default)]
    pub output: Option<String>,
    /// Optional JSON run-summary artifact path
    #[serde(default)]
    pub summary: Option<String>,
}

impl RankingConfig {
    /// Load config from file path (functional approach)
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankingConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|_| {
                eprintln!("⚠️  Failed to load config from {}, using defaults", p);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Resolved output path for the ranking artifact.
    pub fn output_path(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| self.variant.default_output().to_string())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            reports_dir: default_reports_dir(),
            variant: ScoreVariant::Basic,
            output: None,
            summary: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RankingConfig::default();
        assert_eq!(config.reports_dir, ".");
        assert_eq!(config.variant, ScoreVariant::Basic);
        assert_eq!(config.output_path(), "global_ranking.csv");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = "reports_dir: results\nvariant: cnn\n";
        let config: RankingConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.reports_dir, "results");
        assert_eq!(config.variant, ScoreVariant::Cnn);
        assert_eq!(config.output_path(), "global_ranking_cnn.csv");
    }

    #[test]
    fn test_missing_config_falls_back_to_default() {
        let config = RankingConfig::load_with_fallback(Some("/nonexistent/config.yaml"));
        assert_eq!(config.reports_dir, ".");
    }

    #[test]
    fn test_explicit_output_wins() {
        let config = RankingConfig {
            output: Some("custom.csv".to_string()),
            ..Default::default()
        };
        assert_eq!(config.output_path(), "custom.csv");
    }
}
