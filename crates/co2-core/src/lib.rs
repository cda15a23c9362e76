//! Domain layer between `co2-cloudflare` and the action binary.
//!
//! This crate owns the measurement and reporting logic for the
//! CO2 action workspace:
//!
//! - **[`accountant`]** -- walks the target path and sums regular-file
//!   bytes, skipping version-control and dependency directories.
//! - **[`emissions`]** -- the [`EmissionsModel`] capability trait plus
//!   the pinned [`SustainableWebDesign`] per-byte model.
//! - **[`fetcher`]** -- optional Cloudflare analytics with strict
//!   soft-degradation: every failure becomes a warning and `None`.
//! - **[`report`]** -- composes the `report.txt` document (TOML with a
//!   fixed header) from the measured and fetched inputs.
//! - **[`runner`]** -- the [`Runner`] facade driving one full run:
//!   measure → estimate → fetch → compose → write.

pub mod accountant;
pub mod config;
pub mod emissions;
pub mod error;
pub mod fetcher;
pub mod report;
pub mod runner;
pub mod traffic;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{CloudflareSettings, RunConfig};
pub use emissions::{EmissionsModel, SustainableWebDesign};
pub use error::CoreError;
pub use fetcher::TrafficSource;
pub use report::{REPORT_VERSION, Report};
pub use runner::{REPORT_FILE_NAME, RunOutcome, Runner};
pub use traffic::{DailyTraffic, TrafficSummary, TrafficTotals};
