use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(f, "invalid log level/filter '{value}'")
            }
            TelemetryError::Subscriber(err) => write!(f, "unable to install subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Builds the event filter, preferring `RUST_LOG` over the configured level.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
                value: config.log_level.clone(),
                source,
            })
        }
    }
}

/// Installs the global subscriber. Events go to stderr so stdout only carries
/// the simulation transcript.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
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
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn malformed_level_reports_the_offending_value() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        let previous = env::var_os("RUST_LOG");
        env::remove_var("RUST_LOG");

        let config = TelemetryConfig {
            log_level: "hiring=notalevel".to_string(),
        };
        let result = env_filter(&config);

        if let Some(value) = previous {
            env::set_var("RUST_LOG", value);
        }
        match result {
            Err(TelemetryError::EnvFilter { value, .. }) => {
                assert_eq!(value, "hiring=notalevel")
            }
            other => panic!("expected filter error, got {other:?}"),
        }
    }

    #[test]
    fn rust_log_takes_precedence_over_configured_level() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        let previous = env::var_os("RUST_LOG");
        env::set_var("RUST_LOG", "debug");

        let config = TelemetryConfig {
            log_level: "hiring=notalevel".to_string(),
        };
        let result = env_filter(&config);

        match previous {
            Some(value) => env::set_var("RUST_LOG", value),
            None => env::remove_var("RUST_LOG"),
        }
        let filter = result.expect("RUST_LOG filter wins over the configured level");
        assert_eq!(filter.to_string(), "debug");
    }
}
