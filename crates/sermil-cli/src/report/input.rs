use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use sermil_report::config::{load_report_config, ReportConfig};

use super::util::validate_html_output;

/// Resolve the report configuration: the JSON file (or defaults) with CLI
/// overrides applied on top.
pub fn config_from_arguments(
    config_path: Option<&PathBuf>,
    matches: &ArgMatches,
) -> Result<ReportConfig> {
    let mut config = match config_path {
        Some(path) => load_report_config(path)?,
        None => ReportConfig::default(),
    };

    if let Some(prefix) = matches.get_one::<String>("data") {
        config.path_prefix = prefix.clone();
    }

    if let Some(start_year) = matches.get_one::<i32>("start_year") {
        config.start_year = *start_year;
    }

    if let Some(end_year) = matches.get_one::<i32>("end_year") {
        config.end_year = *end_year;
    }

    if let Some(output) = matches.get_one::<PathBuf>("output_file") {
        config.output_html = Some(output.clone());
    }

    if let Some(output) = &config.output_html {
        validate_html_output(output)?;
    }

    config.validate()?;
    Ok(config)
}
