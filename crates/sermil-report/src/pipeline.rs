//! Load, merge, map, aggregate, normalize and render in one pass.
use anyhow::{bail, Result};

use crate::aggregate::{aggregate_records, RegionProportions};
use crate::config::ReportConfig;
use crate::error::AggregateError;
use crate::io::{load_years, YearTable};
use crate::report::{stacked_series, ChartSurface, PlotlySurface};

#[derive(Debug, Clone, Default)]
pub struct ReportPipeline {
    config: ReportConfig,
}

impl ReportPipeline {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run with the prefix and year range from the configuration.
    pub fn run(&self, surface: Option<&mut dyn ChartSurface>) -> Result<Option<RegionProportions>> {
        self.generate(
            &self.config.path_prefix,
            self.config.start_year,
            self.config.end_year,
            surface,
        )
    }

    /// Build the regional exemption chart for `start_year..=end_year`.
    ///
    /// If any year fails to load, the diagnostic is printed to stdout, nothing
    /// is drawn and `Ok(None)` is returned. When `surface` is `None` a
    /// [`PlotlySurface`] is created from the configuration.
    pub fn generate(
        &self,
        path_prefix: &str,
        start_year: i32,
        end_year: i32,
        surface: Option<&mut dyn ChartSurface>,
    ) -> Result<Option<RegionProportions>> {
        if start_year > end_year {
            bail!("Start year {} is after end year {}", start_year, end_year);
        }
        if self.config.reader.delimiter_byte().is_none() {
            bail!(
                "CSV delimiter must be a single ASCII character: {:?}",
                self.config.reader.delimiter
            );
        }

        let tables = match load_years(path_prefix, start_year..=end_year, &self.config.reader) {
            Ok(tables) => tables,
            Err(e) => {
                println!("{}", e);
                log::debug!("[SERMIL::Report] Aborting run: {:?}", e);
                return Ok(None);
            }
        };

        let proportions = self.aggregate(&tables)?;
        for share in &proportions.shares {
            log::info!(
                "[SERMIL::Report] {}: {:.2}% com dispensa, {:.2}% sem dispensa ({} records)",
                share.region,
                share.with_percent,
                share.without_percent,
                share.total()
            );
        }

        match surface {
            Some(surface) => self.render(&proportions, surface)?,
            None => {
                let mut surface = PlotlySurface::new(self.config.output_html.clone());
                self.render(&proportions, &mut surface)?
            }
        }

        Ok(Some(proportions))
    }

    /// Merge the yearly tables in year order and aggregate them.
    pub fn aggregate(&self, tables: &[YearTable]) -> Result<RegionProportions, AggregateError> {
        let total: usize = tables.iter().map(|table| table.records.len()).sum();
        log::info!(
            "[SERMIL::Report] Aggregating {} records from {} year(s)",
            total,
            tables.len()
        );
        aggregate_records(tables.iter().flat_map(|table| table.records.iter()))
    }

    /// Draw both stacked layers, the title and the legend, then present.
    pub fn render(
        &self,
        proportions: &RegionProportions,
        surface: &mut dyn ChartSurface,
    ) -> Result<()> {
        let [with, without] = stacked_series(
            proportions,
            &self.config.with_color,
            &self.config.without_color,
        );
        surface.add_segments(with);
        surface.add_segments(without);
        surface.set_title(&self.config.title);
        surface.show_legend();
        surface.present(proportions)
    }
}
