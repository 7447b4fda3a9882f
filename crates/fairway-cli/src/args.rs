use std::path::PathBuf;

use clap::Parser;

use fairway_core::catalog::FormatId;
use fairway_leaderboard::rank::RankMetric;

use crate::config::{FairwayConfig, OutputFormat};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Settle a golf round snapshot and print its report", long_about = None)]
pub struct Args {
    /// Round snapshot to settle (.json, or .msgpack for the binary codec)
    pub snapshot: PathBuf,

    /// Config file (defaults to FAIRWAY_CONFIG, then ./fairway.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Format to settle; repeat for several. Overrides the config list.
    #[arg(long = "format", value_name = "ID")]
    pub formats: Vec<FormatId>,

    /// Leaderboard metric: net, stableford, putts or gross
    #[arg(long)]
    pub metric: Option<RankMetric>,

    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Settle without checking the snapshot against the data-entry rules
    #[arg(long)]
    pub no_validate: bool,
}

impl Args {
    /// Command-line flags take precedence over the file and environment.
    pub fn apply_to(&self, config: &mut FairwayConfig) {
        if !self.formats.is_empty() {
            config.formats.clone_from(&self.formats);
        }
        if let Some(metric) = self.metric {
            config.leaderboard_metric = metric;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.no_validate {
            config.validate_snapshot = false;
        }
    }
}
