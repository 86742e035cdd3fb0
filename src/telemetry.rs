use crate::error::RiskError;
use tracing_subscriber::EnvFilter;

/// Filter directive from the CLI verbosity flags, if they ask for one.
pub fn verbosity_level(verbose: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose {
        0 => None,
        1 => Some("info"),
        _ => Some("debug"),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `fallback`.
pub fn init(fallback: &str) -> Result<(), RiskError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback).map_err(|source| {
            RiskError::Telemetry(format!("invalid log level/filter '{fallback}': {source}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| RiskError::Telemetry(err.to_string()))
}
