//! Logging initialization.
//!
//! Installs a `tracing` subscriber with an env filter and either a
//! human-readable or a JSON formatter.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::QuillResult;
use serde::{Deserialize, Serialize};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-field human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parses a format name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LogSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    ///
    /// Applies to every target, the workspace crates included.
    #[must_use]
    pub fn default_directive(&self) -> String {
        self.level.clone()
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Log lines go to
/// stderr so stdout stays free for command output. Fails if a global
/// subscriber is already installed.
#[cfg(feature = "telemetry")]
pub fn init_logging(settings: &LogSettings) -> QuillResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_directive()));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match settings.format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| crate::QuillError::Internal(format!("Failed to install logger: {}", e)))?;

    tracing::debug!(level = %settings.level, format = ?settings.format, "Logging initialized");
    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_logging(_settings: &LogSettings) -> QuillResult<()> {
    Ok(())
}

/// Run `f` under a temporary stderr subscriber.
///
/// Covers work that happens before the configured subscriber can be built,
/// such as loading the configuration itself. Only `RUST_LOG` controls it;
/// without it, warnings and errors are shown.
#[cfg(feature = "telemetry")]
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::with_default(subscriber, f)
}

/// Runs `f` directly when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    f()
}
