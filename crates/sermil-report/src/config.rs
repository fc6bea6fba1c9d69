use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::io::SermilReaderConfig;

pub const DEFAULT_TITLE: &str = "Proporção de alistados com e sem dispensas por Região";
pub const WITH_EXEMPTION_COLOR: &str = "#A50030";
pub const WITHOUT_EXEMPTION_COLOR: &str = "#1A3071";

/// Central configuration for a report run.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Prefix prepended to `sermil<year>.csv`.
    pub path_prefix: String,
    pub start_year: i32,
    pub end_year: i32,
    pub reader: SermilReaderConfig,
    pub title: String,
    pub with_color: String,
    pub without_color: String,
    /// Write an HTML report here instead of opening the chart in a browser.
    pub output_html: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path_prefix: String::new(),
            start_year: 2018,
            end_year: 2022,
            reader: SermilReaderConfig::default(),
            title: DEFAULT_TITLE.to_string(),
            with_color: WITH_EXEMPTION_COLOR.to_string(),
            without_color: WITHOUT_EXEMPTION_COLOR.to_string(),
            output_html: None,
        }
    }
}

impl ReportConfig {
    pub fn new(path_prefix: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            start_year,
            end_year,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_year > self.end_year {
            bail!(
                "Start year {} is after end year {}",
                self.start_year,
                self.end_year
            );
        }
        if self.reader.delimiter_byte().is_none() {
            bail!("CSV delimiter must be a single ASCII character: {:?}", self.reader.delimiter);
        }
        Ok(())
    }
}

/// Load a report configuration from a JSON file.
pub fn load_report_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ReportConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
