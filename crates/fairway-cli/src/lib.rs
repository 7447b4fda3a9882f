pub mod args;
pub mod config;
pub mod error;
pub mod report;

use std::io::Write;
use std::path::Path;

use fairway_core::snapshot::{RoundSnapshot, decode_binary, decode_json};

use config::{FairwayConfig, OutputFormat};
use error::CliError;
use report::{RoundReport, build_report, render_pretty};

/// Read a snapshot, picking the codec from the file extension.
pub fn read_snapshot(path: &Path) -> Result<RoundSnapshot, CliError> {
    let io_err = |source: std::io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let binary = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("msgpack") || e.eq_ignore_ascii_case("mp"));

    let snapshot = if binary {
        decode_binary(&std::fs::read(path).map_err(io_err)?)?
    } else {
        decode_json(&std::fs::read_to_string(path).map_err(io_err)?)?
    };
    tracing::debug!(
        path = %path.display(),
        binary,
        players = snapshot.library.roster.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// Validate (when configured) and settle a snapshot.
pub fn settle(snapshot: &RoundSnapshot, config: &FairwayConfig) -> Result<RoundReport, CliError> {
    if config.validate_snapshot {
        snapshot.validate()?;
    }
    build_report(snapshot, &config.unique_formats(), config.leaderboard_metric)
}

/// Encode the report in the configured output format.
pub fn write_report(
    report: &RoundReport,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let io = |e: std::io::Error| CliError::Output(e.to_string());
    match output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)
                .map_err(|e| CliError::Output(e.to_string()))?;
            writeln!(out).map_err(io)
        },
        OutputFormat::Msgpack => {
            let bytes =
                rmp_serde::to_vec_named(report).map_err(|e| CliError::Output(e.to_string()))?;
            out.write_all(&bytes).map_err(io)
        },
        OutputFormat::Pretty => out.write_all(render_pretty(report).as_bytes()).map_err(io),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::snapshot::encode_json;
    use fairway_core::test_helpers::field_round;

    fn snapshot() -> RoundSnapshot {
        let (library, round) = field_round(&[[4; 18], [5; 18]]);
        RoundSnapshot::new(library, round)
    }

    #[test]
    fn invalid_snapshot_is_rejected_unless_disabled() {
        let mut snap = snapshot();
        snap.library.roster[0].handicap_index = 80.0;
        let config = FairwayConfig::default();
        assert!(matches!(settle(&snap, &config), Err(CliError::Snapshot(_))));

        let lenient = FairwayConfig {
            validate_snapshot: false,
            ..FairwayConfig::default()
        };
        assert!(settle(&snap, &lenient).is_ok());
    }

    #[test]
    fn extreme_handicaps_settle_when_unvalidated() {
        let mut snap = snapshot();
        snap.library.roster[0].handicap_index = 1e12;
        snap.library.roster[1].handicap_index = -1e12;
        let lenient = FairwayConfig {
            validate_snapshot: false,
            ..FairwayConfig::default()
        };
        let report = settle(&snap, &lenient).unwrap();
        assert_eq!(report.cards[0].course_handicap, i32::from(i16::MAX));
        assert_eq!(report.cards[1].course_handicap, i32::from(i16::MIN));
    }

    #[test]
    fn json_output_is_parseable() {
        let report = settle(&snapshot(), &FairwayConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_report(&report, OutputFormat::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["round"], "Saturday Round");
    }

    #[test]
    fn read_snapshot_from_json_file() {
        let path = std::env::temp_dir().join(format!("fairway-lib-{}.json", std::process::id()));
        std::fs::write(&path, encode_json(&snapshot()).unwrap()).unwrap();
        let loaded = read_snapshot(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, snapshot());
    }

    #[test]
    fn missing_snapshot_reports_the_path() {
        let err = read_snapshot(Path::new("/nonexistent/round.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/round.json"));
    }
}
