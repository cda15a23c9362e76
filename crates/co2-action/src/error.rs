//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text. One translation, at the top of `main`.

use miette::Diagnostic;
use thiserror::Error;

use co2_config::ConfigError;
use co2_core::CoreError;

/// Exit codes for process termination.
#[allow(dead_code)]
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Measurement ──────────────────────────────────────────────────

    #[error("Target path does not exist: {path}")]
    #[diagnostic(
        code(co2::path_not_found),
        help(
            "Check the `path` input -- it must point at a file or directory\n\
             inside the checked-out workspace."
        )
    )]
    PathNotFound { path: String },

    #[error("Could not read {path} while measuring")]
    #[diagnostic(code(co2::scan_failed))]
    Scan {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── Report ───────────────────────────────────────────────────────

    #[error("Could not write the report at {path}")]
    #[diagnostic(
        code(co2::report_write),
        help("Check that the `destination` directory is writable.")
    )]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(co2::validation))]
    Validation { field: String, reason: String },

    #[error("Configuration loading failed")]
    #[diagnostic(
        code(co2::config),
        help("Check co2.toml and any INPUT_* environment variables.")
    )]
    Config(#[source] ConfigError),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PathNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PathNotFound { path } => Self::PathNotFound {
                path: path.display().to_string(),
            },
            CoreError::Walk { path, source } => Self::Scan {
                path: path.display().to_string(),
                source,
            },
            CoreError::ReportWrite { path, source } => Self::ReportWrite {
                path: path.display().to_string(),
                source,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}
