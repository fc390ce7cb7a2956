use std::path::PathBuf;

use anyhow::{Context, Result};
use globset::Glob;
use tracing::{info, warn};

use tally::config::TallyConfig;
use tally::report::json;
use tally::{Issue, Report, Severity};

/// Loads and merges reports for the command line front end.
pub struct Aggregator {
    config: TallyConfig,
}

impl Aggregator {
    pub fn new(config: Option<TallyConfig>) -> Self {
        Aggregator {
            config: config.unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &TallyConfig {
        &self.config
    }

    /// Merge the reports at `paths`, in order, into one report.
    ///
    /// Provenance from the config takes precedence over the merged
    /// reports. Files that cannot be loaded are recorded in the error log
    /// of the result instead of aborting the merge.
    pub fn merge(&self, paths: &[PathBuf]) -> Result<Report> {
        let mut merged = Report::new();
        if let Some(ref origin) = self.config.report.origin {
            merged.set_origin(origin.as_str())?;
        }
        if let Some(ref reference) = self.config.report.reference {
            merged.set_reference(reference.as_str())?;
        }

        for path in paths {
            match json::load(path) {
                Ok(report) => {
                    merged.add_report(&report);
                    merged.log_info(format_args!(
                        "{}: {} issues",
                        path.display(),
                        report.len()
                    ));
                }
                Err(e) => {
                    warn!("Skipping {}: {:#}", path.display(), e);
                    merged.log_error(format_args!("{}: {:#}", path.display(), e));
                }
            }
        }

        info!(
            "Merged {} reports: {} issues, {} duplicates",
            paths.len(),
            merged.len(),
            merged.duplicates_size()
        );
        Ok(merged)
    }

    /// Keep the issues at or above `min_severity` whose file name matches
    /// `file_glob`. The config's minimum severity applies when none is given.
    pub fn narrow(
        &self,
        report: Report,
        min_severity: Option<Severity>,
        file_glob: Option<&str>,
    ) -> Result<Report> {
        let mut report = report;
        if let Some(threshold) = min_severity.or(self.config.output.min_severity) {
            report = report.filter(|issue| issue.severity() >= threshold);
        }
        if let Some(pattern) = file_glob {
            let matcher = Glob::new(pattern)
                .with_context(|| format!("Invalid file glob '{}'", pattern))?
                .compile_matcher();
            report = report.filter(|issue: &Issue| matcher.is_match(issue.file_name()));
        }
        Ok(report)
    }
}
