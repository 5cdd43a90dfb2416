pub mod report;

use crate::types::{Phase, VoxelSpacing};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for biopsycat
#[derive(Parser, Debug)]
#[command(name = "biopsycat")]
#[command(about = "Stage biopsy lesion masks and build a centroid catalog")]
#[command(version)]
pub struct Cli {
    /// Root path containing (or naming) the rois directory
    #[arg(long = "root-path", alias = "root_path", value_name = "DIR")]
    pub root_path: PathBuf,

    /// Phase to run: 1 stages masks, 2 builds the catalog
    #[arg(long, value_name = "1|2", value_parser = parse_part)]
    pub part: Phase,

    /// Voxel spacing masks are resampled to, in mm ("x y z" or one value)
    #[arg(long, default_value = "1.0 1.0 1.0")]
    pub spacing: VoxelSpacing,

    /// Output format for the run summary
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_part(s: &str) -> Result<Phase, String> {
    s.trim()
        .parse::<u8>()
        .ok()
        .and_then(Phase::from_number)
        .ok_or_else(|| format!("expected 1 or 2, got '{}'", s))
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
