use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fairway_core::catalog::{FormatId, computed_formats};
use fairway_leaderboard::rank::RankMetric;

use crate::error::CliError;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fairway.toml";

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Json,
    #[default]
    Pretty,
    Msgpack,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "msgpack" => Ok(Self::Msgpack),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level configuration, loaded from `fairway.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FairwayConfig {
    /// Formats settled into the report, in report order.
    pub formats: Vec<FormatId>,
    pub leaderboard_metric: RankMetric,
    pub output: OutputFormat,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
    /// Reject snapshots that fail the data-entry rules before settling.
    pub validate_snapshot: bool,
}

impl Default for FairwayConfig {
    fn default() -> Self {
        Self {
            formats: computed_formats(),
            leaderboard_metric: RankMetric::default(),
            output: OutputFormat::default(),
            log_json: false,
            validate_snapshot: true,
        }
    }
}

impl FairwayConfig {
    /// Load config from `explicit`, `FAIRWAY_CONFIG`, or `fairway.toml`,
    /// then apply `FAIRWAY_*` overrides. A missing default file means
    /// defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("FAIRWAY_CONFIG").map(PathBuf::from));

        let mut config = match named {
            Some(path) => Self::from_file(&path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply `FAIRWAY_*` overrides read through `lookup`. Unparseable values
    /// are logged and skipped.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("FAIRWAY_FORMATS")
            && !val.is_empty()
        {
            match val
                .split(',')
                .map(|s| s.trim().parse::<FormatId>())
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(formats) => self.formats = formats,
                Err(e) => tracing::warn!(value = %val, "ignoring FAIRWAY_FORMATS: {e}"),
            }
        }
        if let Some(val) = lookup("FAIRWAY_METRIC")
            && !val.is_empty()
        {
            match val.parse::<RankMetric>() {
                Ok(metric) => self.leaderboard_metric = metric,
                Err(e) => tracing::warn!("ignoring FAIRWAY_METRIC: {e}"),
            }
        }
        if let Some(val) = lookup("FAIRWAY_OUTPUT")
            && !val.is_empty()
        {
            match val.parse::<OutputFormat>() {
                Ok(output) => self.output = output,
                Err(e) => tracing::warn!("ignoring FAIRWAY_OUTPUT: {e}"),
            }
        }
        if let Some(val) = lookup("FAIRWAY_LOG_JSON")
            && let Ok(flag) = val.parse::<bool>()
        {
            self.log_json = flag;
        }
        if let Some(val) = lookup("FAIRWAY_VALIDATE")
            && let Ok(flag) = val.parse::<bool>()
        {
            self.validate_snapshot = flag;
        }
    }

    /// Reject configurations that cannot produce a report.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.formats.is_empty() {
            return Err(CliError::Config("formats must not be empty".to_string()));
        }
        if let Some(id) = self.formats.iter().find(|id| !id.is_computed()) {
            return Err(CliError::Config(format!(
                "format {id} is descriptive only and cannot be settled"
            )));
        }
        Ok(())
    }

    /// Formats in configured order with repeats dropped.
    pub fn unique_formats(&self) -> Vec<FormatId> {
        let mut out: Vec<FormatId> = Vec::with_capacity(self.formats.len());
        for &id in &self.formats {
            if !out.contains(&id) {
                out.push(id);
            }
        }
        out
    }
}
