use anyhow::Result;
use log::LevelFilter;
use std::path::PathBuf;

use sermil_cli::build_cli;
use sermil_cli::report::input::config_from_arguments;
use sermil_report::ReportPipeline;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SERMIL_LOG", "error,sermil=info"))
        .init();

    let matches = build_cli().get_matches();

    let config_path: Option<&PathBuf> = matches.get_one("config");
    match config_path {
        Some(path) => log::info!("[SERMIL::Report] Using config: {:?}", path),
        None => log::info!("[SERMIL::Report] No config provided; using defaults."),
    }

    let config = config_from_arguments(config_path, &matches)?;
    if config_path.is_none() {
        let effective = serde_json::to_string_pretty(&config).unwrap_or_default();
        eprintln!("[SERMIL::Report] Effective config:\n{}", effective);
    }

    match ReportPipeline::new(config).run(None) {
        Ok(Some(proportions)) => {
            log::info!(
                "[SERMIL::Report] Rendered {} regions ({} rows without a known UF).",
                proportions.shares.len(),
                proportions.unmapped_rows
            );
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            log::error!("Report failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
