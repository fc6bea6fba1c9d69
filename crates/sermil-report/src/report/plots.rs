use std::path::PathBuf;

use anyhow::{Context, Result};
use plotly::common::{Font, Marker, Orientation, TextAnchor, TextPosition};
use plotly::layout::{Axis, BarMode, Layout};
use plotly::{Bar, Plot};

use crate::aggregate::RegionProportions;
use crate::report::html::render_report_page;
use crate::report::surface::{ChartSurface, SegmentSeries};

/// Plotly-backed surface.
///
/// Layers are stacked by plotly (`BarMode::Stack`) in the order they were
/// added, so `SegmentSeries::offsets` is not used.
///
/// Without an output path, `present` opens the chart in the default browser.
#[derive(Debug, Default)]
pub struct PlotlySurface {
    title: Option<String>,
    layers: Vec<SegmentSeries>,
    legend: bool,
    output_html: Option<PathBuf>,
}

impl PlotlySurface {
    pub fn new(output_html: Option<PathBuf>) -> Self {
        Self {
            output_html,
            ..Self::default()
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Build a horizontal stacked bar plot from the layers drawn so far.
    pub fn build_plot(&self) -> Plot {
        let mut plot = Plot::new();

        for layer in &self.layers {
            let trace = Bar::new(layer.widths.clone(), layer.categories.clone())
                .name(layer.name.as_str())
                .orientation(Orientation::Horizontal)
                .marker(Marker::new().color(layer.color.clone()))
                .text_array(layer.labels.clone())
                .text_position(TextPosition::Inside)
                .inside_text_anchor(TextAnchor::Middle)
                .text_font(Font::new().size(10));
            plot.add_trace(trace);
        }

        let mut layout = Layout::new()
            .bar_mode(BarMode::Stack)
            .show_legend(self.legend)
            .x_axis(Axis::new().title("%").range(vec![0.0, 100.0]));
        if let Some(title) = &self.title {
            layout = layout.title(title.as_str());
        }
        plot.set_layout(layout);

        plot
    }
}

impl ChartSurface for PlotlySurface {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn add_segments(&mut self, series: SegmentSeries) {
        self.layers.push(series);
    }

    fn show_legend(&mut self) {
        self.legend = true;
    }

    fn present(&mut self, proportions: &RegionProportions) -> Result<()> {
        let plot = self.build_plot();
        match &self.output_html {
            Some(path) => {
                let page = render_report_page(self.title().unwrap_or_default(), &plot, proportions);
                std::fs::write(path, page)
                    .with_context(|| format!("Failed to write report: {}", path.display()))?;
                log::info!("[SERMIL::Report] Wrote report to {}", path.display());
            }
            None => plot.show(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(name: &str, color: &str, widths: Vec<f64>) -> SegmentSeries {
        SegmentSeries {
            name: name.to_string(),
            color: color.to_string(),
            categories: vec!["Sudeste".to_string(), "Sul".to_string()],
            labels: widths.iter().map(|w| format!("{:.2}%", w)).collect(),
            offsets: vec![0.0; widths.len()],
            widths,
        }
    }

    #[test]
    fn plot_is_horizontal_and_stacked() {
        let mut surface = PlotlySurface::new(None);
        surface.set_title("Teste");
        surface.add_segments(layer("Com dispensa", "#A50030", vec![40.0, 75.0]));
        surface.add_segments(layer("Sem dispensa", "#1A3071", vec![60.0, 25.0]));
        surface.show_legend();

        let json = surface.build_plot().to_json();
        assert!(json.contains("\"stack\""));
        assert!(json.contains("\"h\""));
        assert!(json.contains("#A50030"));
        assert!(json.contains("#1A3071"));
        assert!(json.contains("75.00%"));
        assert!(json.contains("Teste"));
    }

    #[test]
    fn stacking_comes_from_layer_order_not_offsets() {
        let mut shifted = layer("Sem dispensa", "#1A3071", vec![60.0, 25.0]);
        shifted.offsets = vec![40.0, 75.0];

        let mut surface = PlotlySurface::new(None);
        surface.add_segments(layer("Com dispensa", "#A50030", vec![40.0, 75.0]));
        surface.add_segments(shifted);

        let json = surface.build_plot().to_json();
        assert!(json.contains("\"stack\""));
        assert!(!json.contains("\"base\""));
        let with_at = json.find("Com dispensa").unwrap();
        let without_at = json.find("Sem dispensa").unwrap();
        assert!(with_at < without_at);
    }

    #[test]
    fn empty_surface_has_no_title() {
        let surface = PlotlySurface::default();
        assert!(surface.title().is_none());
        assert!(!surface.build_plot().to_json().contains("Com dispensa"));
    }
}
