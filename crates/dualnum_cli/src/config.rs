//! Command line configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use dualnum_core::math::solvers::SolverConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "DUALNUM_LOG_LEVEL";
/// Environment variable overriding the solver tolerance.
pub const ENV_TOLERANCE: &str = "DUALNUM_TOLERANCE";
/// Environment variable overriding the solver iteration cap.
pub const ENV_MAX_ITERATIONS: &str = "DUALNUM_MAX_ITERATIONS";
/// Environment variable overriding the output precision.
pub const ENV_PRECISION: &str = "DUALNUM_PRECISION";

/// Largest useful number of decimal places for `f64` output.
pub const MAX_PRECISION: usize = 17;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A value that does not parse as the expected type.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Setting or variable name
        key: String,
        /// Raw text that failed to parse
        value: String,
    },

    /// Output precision out of range.
    #[error("Invalid precision: {0}. Must be at most {max}", max = MAX_PRECISION)]
    InvalidPrecision(usize),

    /// Solver settings rejected by the library.
    #[error("Invalid solver configuration: {0}")]
    Solver(#[from] dualnum_core::types::ConfigError),

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-iteration solver events
    Trace,
    /// Solver steps
    Debug,
    /// Progress messages
    #[default]
    Info,
    /// Solver failures
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formatting settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places printed for values and derivatives
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { precision: 10 }
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Newton solver settings (`[solver]` table)
    pub solver: SolverConfig<f64>,
    /// Output settings (`[output]` table)
    pub output: OutputConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl AppConfig {
    /// Create a new AppConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables, read through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(tolerance) = lookup(ENV_TOLERANCE) {
            self.solver.tolerance = parse_value(ENV_TOLERANCE, &tolerance)?;
        }
        if let Some(iterations) = lookup(ENV_MAX_ITERATIONS) {
            self.solver.max_iterations = parse_value(ENV_MAX_ITERATIONS, &iterations)?;
        }
        if let Some(precision) = lookup(ENV_PRECISION) {
            self.output.precision = parse_value(ENV_PRECISION, &precision)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(tolerance) = cli.tolerance {
            self.solver.tolerance = tolerance;
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.solver.max_iterations = max_iterations;
        }
        if let Some(precision) = cli.precision {
            self.output.precision = precision;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver.validate()?;

        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.output.precision));
        }

        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Solver tolerance override
    pub tolerance: Option<f64>,
    /// Solver iteration cap override
    pub max_iterations: Option<usize>,
    /// Output precision override
    pub precision: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    config.apply_env_with(env)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
