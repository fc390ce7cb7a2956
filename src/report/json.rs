use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::issue::Issue;
use crate::report::{Provenance, Report};

/// On-disk shape of a report.
///
/// Every field is optional on read so that payloads written by older
/// releases still load. `origin` and `reference` are only written when
/// they were set explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default)]
    pub issues: Vec<Issue>,

    #[serde(default)]
    pub duplicates_size: usize,

    #[serde(default)]
    pub info_messages: Vec<String>,

    #[serde(default)]
    pub error_messages: Vec<String>,
}

impl From<Report> for ReportDocument {
    fn from(report: Report) -> Self {
        ReportDocument {
            origin: explicit_value(&report.origin),
            reference: explicit_value(&report.reference),
            issues: report.iter().cloned().collect(),
            duplicates_size: report.duplicates,
            info_messages: report.info_messages,
            error_messages: report.error_messages,
        }
    }
}

impl From<ReportDocument> for Report {
    fn from(document: ReportDocument) -> Self {
        let mut report = Report::new();
        report.add_all(document.issues);
        // Re-admission may surface duplicates in hand-edited payloads.
        report.duplicates += document.duplicates_size;
        report.origin = provenance(document.origin);
        report.reference = provenance(document.reference);
        report.info_messages = document.info_messages;
        report.error_messages = document.error_messages;
        report
    }
}

fn explicit_value(provenance: &Provenance) -> Option<String> {
    provenance.explicit.then(|| provenance.value.clone())
}

fn provenance(value: Option<String>) -> Provenance {
    match value {
        Some(value) if !value.is_empty() => Provenance {
            value,
            explicit: true,
        },
        _ => Provenance::default(),
    }
}

/// Render a report as pretty-printed JSON
pub fn render(report: &Report) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}

/// Read a report previously written by [`render`].
pub fn load(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let report: Report = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse report {}", path.display()))?;
    debug!("Loaded {} from {}", report, path.display());
    Ok(report)
}
