//! sermil-report: regional enlistment exemption proportions.
//!
//! This crate reads the yearly SERMIL CSV dumps (`sermil<year>.csv`), maps each
//! record's UF to one of the five Brazilian regions, computes the share of
//! records with and without exemption per region, and renders the result as a
//! horizontally stacked bar chart.
//!
//! Rendering goes through the [`report::ChartSurface`] trait so the loading and
//! aggregation steps can be exercised without opening a plot viewer.
pub mod aggregate;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod regions;
pub mod report;

pub use aggregate::{Exemption, RegionProportions, RegionShare};
pub use config::ReportConfig;
pub use pipeline::ReportPipeline;
pub use regions::Region;
