use anyhow::Result;

use crate::aggregate::{Exemption, RegionProportions};

/// One layer of a horizontally stacked bar chart: a segment per category,
/// starting at `offsets[i]` and spanning `widths[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSeries {
    pub name: String,
    pub color: String,
    pub categories: Vec<String>,
    pub widths: Vec<f64>,
    /// Left edge of each segment. Surfaces that stack layers themselves,
    /// such as [`PlotlySurface`](crate::report::PlotlySurface), ignore it.
    pub offsets: Vec<f64>,
    /// Text centered on each segment.
    pub labels: Vec<String>,
}

/// Target the report pipeline draws into.
pub trait ChartSurface {
    fn set_title(&mut self, title: &str);

    /// Add a layer to the right of the layers already drawn.
    fn add_segments(&mut self, series: SegmentSeries);

    fn show_legend(&mut self);

    /// Display or emit the finished chart.
    fn present(&mut self, proportions: &RegionProportions) -> Result<()>;
}

/// Build the two stacked layers: "Com dispensa" starting at zero and
/// "Sem dispensa" starting where the first one ends.
pub fn stacked_series(
    proportions: &RegionProportions,
    with_color: &str,
    without_color: &str,
) -> [SegmentSeries; 2] {
    let categories: Vec<String> = proportions
        .regions()
        .iter()
        .map(|region| region.name().to_string())
        .collect();
    let with = proportions.percents(Exemption::With);
    let without = proportions.percents(Exemption::Without);

    let layer = |exemption: Exemption, color: &str, widths: Vec<f64>, offsets: Vec<f64>| {
        SegmentSeries {
            name: exemption.label().to_string(),
            color: color.to_string(),
            categories: categories.clone(),
            labels: widths.iter().map(|w| format!("{:.2}%", w)).collect(),
            widths,
            offsets,
        }
    };

    [
        layer(Exemption::With, with_color, with.clone(), vec![0.0; with.len()]),
        layer(Exemption::Without, without_color, without, with),
    ]
}
