//! CLI configuration -- thin wrapper around the `co2_config` layers.
//!
//! Loads defaults → `co2.toml` → `INPUT_*` env, then applies CLI flag
//! overrides before translating into `co2_core::RunConfig`.

use co2_core::RunConfig;

use crate::cli::InputOverrides;
use crate::error::CliError;

/// Resolve the full run configuration with flag overrides applied.
pub fn resolve_config(overrides: &InputOverrides) -> Result<RunConfig, CliError> {
    let mut inputs = co2_config::load_inputs()?;

    if let Some(ref path) = overrides.path {
        inputs.path = path.clone();
    }
    if let Some(green) = overrides.green_hosting {
        inputs.green_hosting = green;
    }
    if let Some(ref destination) = overrides.destination {
        inputs.destination = destination.clone();
    }
    if let Some(enabled) = overrides.cloudflare_enabled {
        inputs.cloudflare_enabled = enabled;
    }
    if let Some(ref token) = overrides.cloudflare_api_token {
        inputs.cloudflare_api_token = Some(token.clone());
    }
    if let Some(ref zone) = overrides.cloudflare_zone_id {
        inputs.cloudflare_zone_id = Some(zone.clone());
    }
    if let Some(ref since) = overrides.cloudflare_since {
        inputs.cloudflare_since = Some(since.clone());
    }
    if let Some(ref until) = overrides.cloudflare_until {
        inputs.cloudflare_until = Some(until.clone());
    }

    Ok(co2_config::to_run_config(&inputs)?)
}
