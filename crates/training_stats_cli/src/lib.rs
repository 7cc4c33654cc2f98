//! Entry-point plumbing for the `training_stats_cli` binary: tracing setup
//! and the loop that turns sensor packages into report lines.

use std::io::Write;

use anyhow::Context;
use training_stats::config::OutputFormat;
use training_stats::{read_package, render};

/// Packages processed by the binary, in output order.
pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Build the log filter for `log_level`, falling back to `info` when it does not parse.
pub fn env_filter(log_level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_new(log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Install the global subscriber. Logs go to stderr so stdout carries only reports.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(log_level))
        .init();
}

/// Write one report line per package. Stops at the first package that fails.
pub fn run<W: Write>(
    packages: &[(&str, &[f64])],
    format: OutputFormat,
    mut out: W,
) -> anyhow::Result<()> {
    for (code, args) in packages {
        let workout = read_package(code, args)
            .inspect_err(|e| tracing::error!("rejected package {code}: {e}"))
            .with_context(|| format!("failed to read package {code}"))?;
        let line = match format {
            OutputFormat::Text => render(&workout),
            OutputFormat::Json => workout.info().to_json()?,
        };
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_packages_keep_reference_order() {
        let codes: Vec<&str> = SAMPLE_PACKAGES.iter().map(|(c, _)| *c).collect();
        assert_eq!(codes, ["SWM", "RUN", "WLK"]);
    }

    #[test]
    fn env_filter_accepts_plain_level() {
        let filter = env_filter("debug");
        assert!(format!("{filter}").contains("debug"));
    }

    #[test]
    fn env_filter_falls_back_on_invalid_input() {
        let filter = env_filter("invalid[[[filter");
        assert!(format!("{filter}").contains("info"));
    }
}
