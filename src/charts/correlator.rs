//! Correlator
//!
//! Builds the payload vs. outcome scatter chart for the site dropdown and
//! payload slider.

use std::collections::HashSet;

use super::figure::{Axis, ChartSpec, LegendEntry, ScatterChart, ScatterPoint};
use super::selection::{PayloadRange, SiteSelection};
use super::theme::ChartTheme;
use crate::dataset::{Dataset, LaunchRecord, Outcome};

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_TITLE: &str = "Launch Outcome";
pub const CATEGORY_LEGEND_TITLE: &str = "Booster Version Category";

/// Scatter chart for `site` and `payload_range` using the default theme
pub fn correlate(dataset: &Dataset, site: &SiteSelection, payload_range: PayloadRange) -> ChartSpec {
    correlate_with_theme(dataset, site, payload_range, &ChartTheme::default())
}

/// Scatter chart of payload mass against outcome
///
/// Records are kept when their payload lies in `payload_range` (inclusive)
/// and, unless `site` is `ALL`, when they were launched from `site`.
/// An inverted range yields an empty chart.
pub fn correlate_with_theme(
    dataset: &Dataset,
    site: &SiteSelection,
    payload_range: PayloadRange,
    theme: &ChartTheme,
) -> ChartSpec {
    let mut legend: Vec<LegendEntry> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut points = Vec::new();

    for record in dataset
        .iter()
        .filter(|r| payload_range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
    {
        let category = record.booster_version_category.as_str();
        if seen.insert(category) {
            let color = theme.series_color(legend.len()).to_string();
            legend.push(LegendEntry {
                name: category.to_string(),
                color,
            });
        }
        points.push(point(record));
    }

    tracing::debug!(
        site = %site,
        range = %payload_range,
        points = points.len(),
        categories = legend.len(),
        "Correlated scatter chart"
    );

    ChartSpec::Scatter(ScatterChart {
        title: scatter_title(site),
        x_axis: Axis::new(PAYLOAD_AXIS_TITLE),
        y_axis: Axis::new(OUTCOME_AXIS_TITLE).ticks(&[
            (0.0, Outcome::Failure.label()),
            (1.0, Outcome::Success.label()),
        ]),
        points,
        legend,
        legend_title: CATEGORY_LEGEND_TITLE.to_string(),
    })
}

fn point(record: &LaunchRecord) -> ScatterPoint {
    ScatterPoint {
        x: record.payload_mass_kg,
        y: f64::from(record.outcome.as_class()),
        category: record.booster_version_category.clone(),
        hover_text: record.booster_version.clone(),
        launch_site: record.launch_site.clone(),
    }
}

fn scatter_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Launch Outcomes by Payload Mass for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Launch Outcomes by Payload Mass for {}", name),
    }
}
