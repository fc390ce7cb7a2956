use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Priority of an issue. Ordered so that `High > Normal > Low`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    #[default]
    Normal,
    High,
}

impl Severity {
    /// All levels, highest first.
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Normal, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Normal => "NORMAL",
            Severity::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HIGH" => Ok(Severity::High),
            "NORMAL" => Ok(Severity::Normal),
            "LOW" => Ok(Severity::Low),
            _ => Err(ReportError::UnknownSeverity {
                value: s.to_string(),
            }),
        }
    }
}

/// Count of issues per severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priorities {
    pub high: usize,
    pub normal: usize,
    pub low: usize,
}

impl Priorities {
    pub fn new(high: usize, normal: usize, low: usize) -> Self {
        Priorities { high, normal, low }
    }

    pub fn from_severities<I>(severities: I) -> Self
    where
        I: IntoIterator<Item = Severity>,
    {
        let mut priorities = Priorities::default();
        for severity in severities {
            match severity {
                Severity::High => priorities.high += 1,
                Severity::Normal => priorities.normal += 1,
                Severity::Low => priorities.low += 1,
            }
        }
        priorities
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Normal => self.normal,
            Severity::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.normal + self.low
    }
}
