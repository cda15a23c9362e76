//! Action-input loading for the CO2 action.
//!
//! Layered the same way the platform resolves inputs: built-in
//! defaults, then an optional `co2.toml` in the working directory,
//! then `INPUT_*` environment variables (the GitHub Actions input
//! convention, where input `green-hosting` arrives as
//! `INPUT_GREEN-HOSTING`). The binary applies CLI-flag overrides on
//! top before translating into `co2_core::RunConfig`.

use std::path::PathBuf;

use chrono::NaiveDate;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use co2_core::{CloudflareSettings, RunConfig};

/// Optional config file consulted below the env layer.
pub const CONFIG_FILE: &str = "co2.toml";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Input schema ────────────────────────────────────────────────────

/// Raw action inputs, exactly as named in the action manifest.
///
/// Dates stay strings here -- validation and day-truncation happen in
/// [`to_run_config`], so a bad `cloudflare-since` produces one clear
/// error instead of a figment type mismatch.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionInputs {
    /// Filesystem root to measure.
    #[serde(default = "default_dot")]
    pub path: String,

    /// Whether the serving infrastructure is renewably powered.
    #[serde(default, rename = "green-hosting")]
    pub green_hosting: bool,

    /// Directory the report is written into.
    #[serde(default = "default_dot")]
    pub destination: String,

    /// Toggles the analytics enrichment.
    #[serde(default, rename = "cloudflare-enabled")]
    pub cloudflare_enabled: bool,

    /// Bearer credential for the analytics API.
    #[serde(default, rename = "cloudflare-api-token")]
    pub cloudflare_api_token: Option<String>,

    /// Target zone identifier.
    #[serde(default, rename = "cloudflare-zone-id")]
    pub cloudflare_zone_id: Option<String>,

    /// Window start (ISO date or timestamp; truncated to the day).
    #[serde(default, rename = "cloudflare-since")]
    pub cloudflare_since: Option<String>,

    /// Window end (ISO date or timestamp; truncated to the day).
    #[serde(default, rename = "cloudflare-until")]
    pub cloudflare_until: Option<String>,
}

fn default_dot() -> String {
    ".".into()
}

impl Default for ActionInputs {
    fn default() -> Self {
        Self {
            path: default_dot(),
            green_hosting: false,
            destination: default_dot(),
            cloudflare_enabled: false,
            cloudflare_api_token: None,
            cloudflare_zone_id: None,
            cloudflare_since: None,
            cloudflare_until: None,
        }
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load inputs from defaults → `co2.toml` → `INPUT_*` env.
pub fn load_inputs() -> Result<ActionInputs, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(ActionInputs::default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed("INPUT_"));

    let inputs: ActionInputs = figment.extract()?;
    Ok(inputs)
}

// ── Translation ─────────────────────────────────────────────────────

/// Translate raw inputs into an immutable [`RunConfig`].
///
/// Empty strings count as absent: the Actions runner materializes
/// unset inputs as `""`, and treating those as real credentials would
/// turn "not configured" into a doomed API call.
pub fn to_run_config(inputs: &ActionInputs) -> Result<RunConfig, ConfigError> {
    let since = non_empty(inputs.cloudflare_since.as_deref())
        .map(|value| parse_day(value, "cloudflare-since"))
        .transpose()?;
    let until = non_empty(inputs.cloudflare_until.as_deref())
        .map(|value| parse_day(value, "cloudflare-until"))
        .transpose()?;

    Ok(RunConfig {
        input_path: PathBuf::from(&inputs.path),
        green_hosting: inputs.green_hosting,
        destination_dir: PathBuf::from(&inputs.destination),
        cloudflare: CloudflareSettings {
            enabled: inputs.cloudflare_enabled,
            api_token: non_empty(inputs.cloudflare_api_token.as_deref())
                .map(|token| SecretString::from(token.to_owned())),
            zone_id: non_empty(inputs.cloudflare_zone_id.as_deref()).map(str::to_owned),
            since,
            until,
        },
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a day-granular date, truncating full ISO-8601 timestamps to
/// their first 10 characters.
pub fn parse_day(value: &str, field: &str) -> Result<NaiveDate, ConfigError> {
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| ConfigError::Validation {
        field: field.to_owned(),
        reason: format!("invalid date '{value}' (use YYYY-MM-DD)"),
    })
}
