//! Log output for the CLI.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid --log-level '{value}'")]
    LogLevel {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Filter built from a `--log-level` value (`warn`, `scorecard_core=debug`, ...).
fn level_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(log_level).map_err(|source| TelemetryError::LogLevel {
        value: log_level.to_string(),
        source,
    })
}

/// Install the stderr subscriber. `RUST_LOG` wins over `log_level`.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_levels_and_directives_parse() {
        assert!(level_filter("warn").is_ok());
        assert!(level_filter("scorecard_core=debug,warn").is_ok());
    }

    #[test]
    fn test_bad_level_names_the_flag_value() {
        let err = level_filter("scorecard_core=loud").unwrap_err();
        assert!(matches!(err, TelemetryError::LogLevel { .. }));
        assert_eq!(err.to_string(), "invalid --log-level 'scorecard_core=loud'");
        assert!(std::error::Error::source(&err).is_some());
    }
}
