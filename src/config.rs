use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::issue::Severity;

pub const CONFIG_FILE: &str = ".tally.toml";

/// Tally configuration (loaded from .tally.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Origin stamped onto merged reports
    #[serde(default)]
    pub origin: Option<String>,

    /// Reference stamped onto merged reports
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,

    /// Minimum severity to report
    #[serde(default)]
    pub min_severity: Option<Severity>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: default_format(),
            min_severity: None,
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}

impl TallyConfig {
    /// Try to load .tally.toml from the given directory or its parents
    pub fn load(start: &Path) -> Option<Self> {
        let config_path = find_config_file(start)?;
        debug!("Found config: {}", config_path.display());

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<TallyConfig>(&content) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                    None
                }
            },
            Err(e) => {
                debug!("Could not read {}: {}", config_path.display(), e);
                None
            }
        }
    }
}

/// Walk up from the start path to find .tally.toml
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(CONFIG_FILE);
        if config.exists() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}

const DEFAULT_CONFIG: &str = r#"# Tally configuration

[report]
# Provenance stamped onto reports built by `tally summary` and `tally merge`
# origin = "ci"
# reference = "main"

[output]
# Default output format: "terminal" or "json"
format = "terminal"

# Minimum severity to report: "HIGH", "NORMAL", "LOW"
# min_severity = "LOW"
"#;

/// Create a default .tally.toml in `dir`. Returns false if one exists.
pub fn init_config(dir: &Path) -> Result<bool> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() {
        return Ok(false);
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    info!("Created {}", config_path.display());
    Ok(true)
}
