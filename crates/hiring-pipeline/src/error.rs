use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::hiring::HiringConfigError;

/// Failures that abort a simulator process before or after the pipeline runs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("hiring configuration rejected: {0}")]
    Hiring(#[from] HiringConfigError),
    #[error("unable to render report: {0}")]
    Render(#[from] serde_json::Error),
}
