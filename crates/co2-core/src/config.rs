//! Run configuration, constructed once per invocation.
//!
//! Produced by `co2-config` (action inputs / config file / env) with
//! CLI-flag overrides applied by the binary; consumed by [`Runner`].
//!
//! [`Runner`]: crate::runner::Runner

use std::path::PathBuf;

use chrono::NaiveDate;
use secrecy::SecretString;

/// Everything one run needs, immutable after construction.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Filesystem root to measure.
    pub input_path: PathBuf,
    /// Whether the serving infrastructure is renewably powered.
    pub green_hosting: bool,
    /// Directory the report is written into.
    pub destination_dir: PathBuf,
    pub cloudflare: CloudflareSettings,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            green_hosting: false,
            destination_dir: PathBuf::from("."),
            cloudflare: CloudflareSettings::default(),
        }
    }
}

/// Cloudflare analytics enrichment settings.
///
/// `enabled` with a missing token or zone id is valid configuration:
/// the fetcher degrades to "no analytics" with a warning instead of
/// failing the run.
#[derive(Debug, Clone, Default)]
pub struct CloudflareSettings {
    pub enabled: bool,
    pub api_token: Option<SecretString>,
    pub zone_id: Option<String>,
    /// Window start; defaults to 30 days before the run date.
    pub since: Option<NaiveDate>,
    /// Window end; defaults to the run date.
    pub until: Option<NaiveDate>,
}
