use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fairway_cli::args::Args;
use fairway_cli::config::FairwayConfig;
use fairway_cli::error::CliError;
use fairway_cli::{read_snapshot, settle, write_report};

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(args: &Args, mut config: FairwayConfig) -> Result<(), CliError> {
    args.apply_to(&mut config);
    config.validate()?;
    tracing::debug!(?config, "configuration resolved");

    let snapshot = read_snapshot(&args.snapshot)?;
    let report = settle(&snapshot, &config)?;
    write_report(&report, config.output, &mut std::io::stdout().lock())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The log format lives in the config, so load it before the subscriber
    // exists and report any failure once logging is up.
    let config = FairwayConfig::load(args.config.as_deref());
    init_tracing(config.as_ref().is_ok_and(|c| c.log_json));

    match config.and_then(|c| run(&args, c)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fairway failed");
            ExitCode::FAILURE
        },
    }
}
