//! Logging setup for hosts embedding the builders.
//!
//! The builders only emit `tracing` events; installing a subscriber is the
//! host's call. This module offers the usual setup so tests and small tools
//! do not each reinvent it.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Module-path prefix shared by the `webnn_core` and `webnn_builders`
/// targets. Events keep their default module-path targets and `EnvFilter`
/// matches directives by prefix, so `webnn=<level>` covers both crates.
pub const LOG_TARGET: &str = "webnn";

/// Log level for the builder targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every node, every operand.
    Trace,
    /// One line per node built.
    Debug,
    /// Pass start/finish and registry population.
    #[default]
    Info,
    /// Lossy type downgrades and rejected nodes.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    fn as_level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

/// Subscriber configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Level applied when `RUST_LOG` is unset.
    pub level: LogLevel,
    /// Emit JSON lines instead of human-readable output.
    pub json_format: bool,
    /// Include file and line of each event.
    pub with_source_location: bool,
}

impl LoggingConfig {
    /// Default configuration (info, text).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Toggle JSON output.
    pub fn with_json_format(mut self, enable: bool) -> Self {
        self.json_format = enable;
        self
    }

    /// Toggle source locations.
    pub fn with_source_location(mut self, enable: bool) -> Self {
        self.with_source_location = enable;
        self
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn filter_directive(&self) -> String {
        format!("{}={}", LOG_TARGET, self.level.as_level().as_str().to_lowercase())
    }
}

/// Install a global subscriber.
///
/// Returns `false` if a subscriber was already installed, which happens when
/// several tests initialise logging in the same process.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .is_ok()
    } else {
        let layer = fmt::layer()
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .is_ok()
    }
}
