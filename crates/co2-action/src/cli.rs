//! Clap derive structures for the `co2-action` CLI.
//!
//! Every action input has a matching long flag so the binary behaves
//! the same under a CI runner (env inputs) and on a developer machine
//! (flags). Flags are the top of the precedence ladder.

use clap::{Args, Parser, Subcommand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// co2-action -- estimate the CO2 footprint of a build artifact
#[derive(Debug, Parser)]
#[command(
    name = "co2-action",
    version,
    about = "Estimate the CO2 footprint of a build artifact",
    long_about = "Walks a filesystem path, sums byte sizes, converts bytes to an\n\
        estimated CO2 mass, optionally enriches the estimate with Cloudflare\n\
        zone analytics, and writes a structured report.txt.",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub inputs: InputOverrides,

    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Option<Command>,
}

// ── Input overrides ──────────────────────────────────────────────────

/// Flag-level overrides for the action inputs. Anything left unset
/// falls through to `co2.toml` / `INPUT_*` env / defaults.
#[derive(Debug, Args)]
pub struct InputOverrides {
    /// Filesystem root to measure
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Whether the serving infrastructure is renewably powered
    #[arg(long, value_name = "BOOL")]
    pub green_hosting: Option<bool>,

    /// Directory the report is written into
    #[arg(long, value_name = "DIR")]
    pub destination: Option<String>,

    /// Toggle the Cloudflare analytics enrichment
    #[arg(long, value_name = "BOOL")]
    pub cloudflare_enabled: Option<bool>,

    /// Cloudflare API token (bearer credential)
    #[arg(long, value_name = "TOKEN")]
    pub cloudflare_api_token: Option<String>,

    /// Cloudflare zone id
    #[arg(long, value_name = "ZONE")]
    pub cloudflare_zone_id: Option<String>,

    /// Analytics window start (YYYY-MM-DD; defaults to 30 days ago)
    #[arg(long, value_name = "DATE")]
    pub cloudflare_since: Option<String>,

    /// Analytics window end (YYYY-MM-DD; defaults to today)
    #[arg(long, value_name = "DATE")]
    pub cloudflare_until: Option<String>,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the success summary line
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Subcommands ──────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
