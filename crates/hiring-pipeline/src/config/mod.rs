use std::env;
use std::fmt;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Distinguishes runtime behavior for different stages of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Ambient settings for a simulator process. Hiring parameters live in
/// [`crate::workflows::hiring::HiringConfig`] and are never read from the
/// environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(source) = dotenvy::dotenv() {
            if !source.not_found() {
                return Err(ConfigError::Dotenv { source });
            }
        }

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = match env::var("APP_LOG_LEVEL") {
            Ok(value) if value.trim().is_empty() => return Err(ConfigError::EmptyLogLevel),
            Ok(value) => value.trim().to_string(),
            Err(_) => DEFAULT_LOG_LEVEL.to_string(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Dotenv { source: dotenvy::Error },
    EmptyLogLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Dotenv { source } => write!(f, "unable to read .env file: {source}"),
            ConfigError::EmptyLogLevel => {
                write!(f, "APP_LOG_LEVEL must not be blank when it is set")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Dotenv { source } => Some(source),
            ConfigError::EmptyLogLevel => None,
        }
    }
}
