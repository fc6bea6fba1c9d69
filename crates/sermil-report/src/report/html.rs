use maud::{html, PreEscaped, DOCTYPE};
use plotly::Plot;

use crate::aggregate::RegionProportions;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// Standalone HTML page with the chart and a table of the underlying counts.
pub fn render_report_page(title: &str, plot: &Plot, proportions: &RegionProportions) -> String {
    let chart = plot.to_inline_html(Some("sermil-chart"));

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { (title) }
                script src=(PLOTLY_JS) {}
            }
            body {
                h1 { (title) }
                (PreEscaped(chart))
                table {
                    thead {
                        tr {
                            th { "Região" }
                            th { "Com dispensa" }
                            th { "Sem dispensa" }
                            th { "Total" }
                            th { "Com dispensa (%)" }
                            th { "Sem dispensa (%)" }
                        }
                    }
                    tbody {
                        @for share in &proportions.shares {
                            tr {
                                td { (share.region.name()) }
                                td { (share.with_count) }
                                td { (share.without_count) }
                                td { (share.total()) }
                                td { (format!("{:.2}%", share.with_percent)) }
                                td { (format!("{:.2}%", share.without_percent)) }
                            }
                        }
                    }
                }
                @if proportions.unmapped_rows > 0 {
                    p { "Registros sem região: " (proportions.unmapped_rows) }
                }
            }
        }
    }
    .into_string()
}
