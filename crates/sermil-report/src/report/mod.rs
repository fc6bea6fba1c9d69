//! Chart rendering.
//!
//! The pipeline draws into a [`ChartSurface`]. [`PlotlySurface`] turns the
//! drawing calls into a `plotly::Plot` and either opens it in the browser or
//! writes a standalone HTML report built with `maud`.
pub mod html;
pub mod plots;
pub mod surface;

pub use plots::PlotlySurface;
pub use surface::{stacked_series, ChartSurface, SegmentSeries};
