//! One full action run: measure → estimate → fetch → compose → write.
//!
//! The runner is the only place where the mandatory pipeline and the
//! soft-degradable analytics pipeline meet. Analytics failures never
//! surface here -- by the time `fetch_analytics` returns, they have
//! already collapsed into `None`.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use crate::accountant;
use crate::config::RunConfig;
use crate::emissions::{EmissionsModel, SustainableWebDesign};
use crate::error::CoreError;
use crate::fetcher;
use crate::report::Report;

/// File name of the produced artifact, under the destination directory.
pub const REPORT_FILE_NAME: &str = "report.txt";

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub total_bytes: u64,
    /// Aggregate estimate for the measured artifact, in grams --
    /// published as the action's named output.
    pub estimated_grams: f64,
    pub report_path: PathBuf,
    /// Whether the report carries an analytics section.
    pub analytics_included: bool,
}

/// Drives one run against an immutable [`RunConfig`].
pub struct Runner<M = SustainableWebDesign> {
    config: RunConfig,
    model: M,
}

impl Runner<SustainableWebDesign> {
    pub fn new(config: RunConfig) -> Self {
        Self::with_model(config, SustainableWebDesign)
    }
}

impl<M: EmissionsModel> Runner<M> {
    /// Build a runner with an explicit emissions model (tests inject a
    /// deterministic fake here).
    pub fn with_model(config: RunConfig, model: M) -> Self {
        Self { config, model }
    }

    /// Execute the full pipeline and write the report.
    ///
    /// Fails only on a missing target path or a report-write error;
    /// analytics problems degrade to an omitted section.
    pub async fn run(&self) -> Result<RunOutcome, CoreError> {
        let total_bytes = accountant::measure(&self.config.input_path)?;
        let estimated_grams = self.model.estimate(total_bytes, self.config.green_hosting);
        info!(
            total_bytes,
            estimated_grams,
            path = %self.config.input_path.display(),
            "measured build artifact"
        );

        let now = Utc::now();
        let analytics = fetcher::fetch_analytics(&self.config.cloudflare, now.date_naive()).await;

        let report = Report::compose(
            total_bytes,
            self.config.green_hosting,
            estimated_grams,
            analytics.as_ref(),
            &self.model,
            now,
        );

        fs::create_dir_all(&self.config.destination_dir).map_err(|source| {
            CoreError::ReportWrite {
                path: self.config.destination_dir.clone(),
                source,
            }
        })?;
        let report_path = self.config.destination_dir.join(REPORT_FILE_NAME);
        fs::write(&report_path, report.render()).map_err(|source| CoreError::ReportWrite {
            path: report_path.clone(),
            source,
        })?;
        info!(report = %report_path.display(), "report written");

        Ok(RunOutcome {
            total_bytes,
            estimated_grams,
            report_path,
            analytics_included: analytics.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::fs;

    use super::*;
    use crate::config::CloudflareSettings;

    fn config_for(tmp: &tempfile::TempDir) -> RunConfig {
        RunConfig {
            input_path: tmp.path().join("dist"),
            green_hosting: false,
            destination_dir: tmp.path().join("out"),
            cloudflare: CloudflareSettings::default(),
        }
    }

    #[tokio::test]
    async fn run_writes_report_into_created_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path().join("dist");
        fs::create_dir(&dist).unwrap();
        fs::write(dist.join("app.js"), vec![0u8; 100]).unwrap();
        fs::write(dist.join("style.css"), vec![0u8; 250]).unwrap();

        let outcome = Runner::new(config_for(&tmp)).run().await.unwrap();

        assert_eq!(outcome.total_bytes, 350);
        assert!(!outcome.analytics_included);
        assert!(outcome.report_path.ends_with("out/report.txt"));

        let text = fs::read_to_string(&outcome.report_path).unwrap();
        assert!(text.contains("total_bytes = 350"));
        assert!(text.contains("green_hosting = false"));
        assert!(!text.contains("[cloudflare]"));
    }

    #[tokio::test]
    async fn run_overwrites_an_existing_report() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path().join("dist");
        fs::create_dir(&dist).unwrap();
        fs::write(dist.join("a.bin"), vec![0u8; 10]).unwrap();
        let out = tmp.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(out.join(REPORT_FILE_NAME), "stale contents").unwrap();

        let outcome = Runner::new(config_for(&tmp)).run().await.unwrap();

        let text = fs::read_to_string(&outcome.report_path).unwrap();
        assert!(!text.contains("stale contents"));
        assert!(text.contains("total_bytes = 10"));
    }

    #[tokio::test]
    async fn missing_path_fails_without_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_for(&tmp); // dist/ never created

        let err = Runner::new(config).run().await.unwrap_err();
        assert!(matches!(err, CoreError::PathNotFound { .. }));
        assert!(!tmp.path().join("out").exists(), "no report dir expected");
    }

    #[tokio::test]
    async fn enabled_analytics_without_credentials_still_produces_a_report() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path().join("dist");
        fs::create_dir(&dist).unwrap();
        fs::write(dist.join("a.bin"), vec![0u8; 42]).unwrap();

        let mut config = config_for(&tmp);
        config.cloudflare.enabled = true; // token + zone id absent

        let outcome = Runner::new(config).run().await.unwrap();
        assert!(!outcome.analytics_included);
        let text = fs::read_to_string(&outcome.report_path).unwrap();
        assert!(!text.contains("[cloudflare]"));
    }
}
