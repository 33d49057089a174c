use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

// Import from dockrank-core
use dockrank_core::chem::lipinski::{read_smiles_column, write_passing_smiles};
use dockrank_core::{
    build_ranking, evaluate_batch, scan_reports, write_ranking_csv, RankingConfig, RunSummary,
    ScoreVariant,
};

#[derive(Parser)]
#[command(name = "dockrank")]
#[command(about = "Aggregate docking score reports and filter molecules by Lipinski's rule of five")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the best docking pose of every report in a directory
    Rank {
        /// Directory holding the *.txt docking report files
        reports_dir: Option<String>,

        /// Parse CNN-rescored tables and rank by CNN affinity
        #[arg(long)]
        cnn: bool,

        /// Path to custom config file (YAML format)
        #[arg(short, long)]
        config: Option<String>,

        /// Output CSV path (default: global_ranking.csv / global_ranking_cnn.csv)
        #[arg(short, long)]
        output: Option<String>,

        /// Write a JSON run summary to this path
        #[arg(long)]
        summary: Option<String>,
    },
    /// Filter a SMILES table by Lipinski's rule of five
    Lipinski {
        /// Input CSV file containing SMILES strings
        input_file: String,

        /// Output CSV file
        #[arg(short, long, default_value = "result_lipinski.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Rank {
            reports_dir,
            cnn,
            config,
            output,
            summary,
        } => run_rank(reports_dir, cnn, config, output, summary),
        Command::Lipinski { input_file, output } => run_lipinski(&input_file, &output),
    }
}

fn run_rank(
    reports_dir: Option<String>,
    cnn: bool,
    config_path: Option<String>,
    output: Option<String>,
    summary_path: Option<String>,
) -> Result<()> {
    let mut config = RankingConfig::load_with_fallback(config_path.as_deref());

    if let Some(path) = &config_path {
        println!("📋 Loaded config from: {}", path);
    }

    // Apply CLI overrides to config
    if let Some(dir) = reports_dir {
        config.reports_dir = dir;
    }
    if cnn {
        config.variant = ScoreVariant::Cnn;
    }
    if output.is_some() {
        config.output = output;
    }
    if summary_path.is_some() {
        config.summary = summary_path;
    }

    println!("📄 Scanning reports in: {}", config.reports_dir);

    let (poses, run) = match scan_reports(&config.reports_dir, config.variant) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ {e:#}");
            std::process::exit(1);
        }
    };

    if poses.is_empty() {
        println!("No results were found in any .txt file.");
        return Ok(());
    }

    let table = build_ranking(poses, config.variant);
    let output_path = config.output_path();
    write_ranking_csv(&table, &output_path)?;

    println!(
        "✅ Ranked {} best poses ({} rows parsed across {} reports)",
        table.entries.len(),
        run.rows_parsed,
        run.reports_scanned
    );
    println!("The global ranking has been saved to '{}'.", output_path);

    if let Some(path) = &config.summary {
        save_summary(&run, path)?;
        println!("📊 Run summary saved to '{}'", path);
    }

    Ok(())
}

fn run_lipinski(input_file: &str, output: &str) -> Result<()> {
    if !Path::new(input_file).exists() {
        eprintln!("❌ Error: The file {} does not exist", input_file);
        std::process::exit(1);
    }

    let smiles = match read_smiles_column(input_file) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("❌ {e:#}");
            std::process::exit(1);
        }
    };

    let evaluations = evaluate_batch(&smiles);
    write_passing_smiles(&evaluations, output)?;

    let passing = evaluations.iter().filter(|e| e.passed).count();
    println!(
        "🧪 {} of {} molecules passed Lipinski's rule of five",
        passing,
        evaluations.len()
    );
    println!("Passing SMILES saved to '{}'.", output);

    Ok(())
}

fn save_summary(summary: &RunSummary, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}
