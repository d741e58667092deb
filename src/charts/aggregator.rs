//! Aggregator
//!
//! Builds the success pie chart for the site dropdown:
//!
//! - `ALL`: successful launches counted per site, largest first
//! - one site: success vs. failure counts for that site

use super::figure::{ChartSpec, PieChart, PieSlice, TextInfo};
use super::selection::SiteSelection;
use super::tally::Tally;
use super::theme::ChartTheme;
use crate::dataset::{Dataset, Outcome};

pub const ALL_SITES_PIE_TITLE: &str = "Proportion of Successful Launches by Launch Site";
pub const OUTCOME_LEGEND_TITLE: &str = "Launch Outcome";

/// Pie chart for `site` using the default theme
pub fn aggregate(dataset: &Dataset, site: &SiteSelection) -> ChartSpec {
    aggregate_with_theme(dataset, site, &ChartTheme::default())
}

/// Pie chart for `site`
///
/// Unknown sites are not rejected; they produce a chart with no slices.
pub fn aggregate_with_theme(
    dataset: &Dataset,
    site: &SiteSelection,
    theme: &ChartTheme,
) -> ChartSpec {
    let pie = match site {
        SiteSelection::All => successes_by_site(dataset, theme),
        SiteSelection::Site(name) => outcomes_for_site(dataset, name, theme),
    };

    tracing::debug!(
        site = %site,
        slices = pie.slices.len(),
        total = pie.total(),
        "Aggregated pie chart"
    );

    ChartSpec::Pie(pie)
}

fn successes_by_site(dataset: &Dataset, theme: &ChartTheme) -> PieChart {
    let tally: Tally<&str> = dataset
        .iter()
        .filter(|r| r.outcome.is_success())
        .map(|r| r.launch_site.as_str())
        .collect();
    let total = tally.total();

    let slices = tally
        .into_descending()
        .into_iter()
        .enumerate()
        .map(|(idx, (site, count))| PieSlice {
            label: site.to_string(),
            value: count,
            percent: percent(count, total),
            color: theme.series_color(idx).to_string(),
        })
        .collect();

    PieChart {
        title: ALL_SITES_PIE_TITLE.to_string(),
        slices,
        legend_title: None,
        text_info: TextInfo::Percent,
    }
}

fn outcomes_for_site(dataset: &Dataset, site: &str, theme: &ChartTheme) -> PieChart {
    let tally: Tally<Outcome> = dataset
        .iter()
        .filter(|r| r.launch_site == site)
        .map(|r| r.outcome)
        .collect();
    let total = tally.total();

    let slices = tally
        .into_first_seen()
        .into_iter()
        .map(|(outcome, count)| PieSlice {
            label: outcome.label().to_string(),
            value: count,
            percent: percent(count, total),
            color: theme.outcome_color(outcome).to_string(),
        })
        .collect();

    PieChart {
        title: format!("Total Successful Launches for site {}", site),
        slices,
        legend_title: Some(OUTCOME_LEGEND_TITLE.to_string()),
        text_info: TextInfo::PercentAndLabel,
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    fn record(site: &str, outcome: Outcome, payload: f64) -> LaunchRecord {
        LaunchRecord::new(site, payload, outcome, "F9 B1", "FT")
    }

    fn three_launches() -> Dataset {
        Dataset::from_records(vec![
            record("A", Outcome::Success, 500.0),
            record("A", Outcome::Failure, 1500.0),
            record("B", Outcome::Success, 3000.0),
        ])
    }

    fn mixed() -> Dataset {
        Dataset::from_records(vec![
            record("CCAFS LC-40", Outcome::Failure, 0.0),
            record("VAFB SLC-4E", Outcome::Success, 500.0),
            record("KSC LC-39A", Outcome::Success, 2490.0),
            record("KSC LC-39A", Outcome::Success, 5300.0),
            record("CCAFS LC-40", Outcome::Success, 4700.0),
            record("KSC LC-39A", Outcome::Failure, 3600.0),
            record("CCAFS SLC-40", Outcome::Success, 3000.0),
        ])
    }

    #[test]
    fn test_all_sites_counts_successes_per_site() {
        let chart = aggregate(&three_launches(), &SiteSelection::All);
        let pie = chart.as_pie().unwrap();

        assert_eq!(pie.title, ALL_SITES_PIE_TITLE);
        assert_eq!(pie.slice("A").unwrap().value, 1);
        assert_eq!(pie.slice("B").unwrap().value, 1);
        assert_eq!(pie.total(), 2);
    }

    #[test]
    fn test_all_sites_sum_equals_success_count() {
        let dataset = mixed();
        let chart = aggregate(&dataset, &SiteSelection::All);
        assert_eq!(chart.as_pie().unwrap().total(), dataset.success_count());
    }

    #[test]
    fn test_all_sites_descending_with_stable_ties() {
        let chart = aggregate(&mixed(), &SiteSelection::All);
        let labels: Vec<&str> = chart
            .as_pie()
            .unwrap()
            .slices
            .iter()
            .map(|s| s.label.as_str())
            .collect();

        // KSC has 2; the rest tie at 1 and keep first-seen order
        assert_eq!(
            labels,
            vec!["KSC LC-39A", "VAFB SLC-4E", "CCAFS LC-40", "CCAFS SLC-40"]
        );
    }

    #[test]
    fn test_single_site_outcome_breakdown() {
        let chart = aggregate(&three_launches(), &SiteSelection::site("A"));
        let pie = chart.as_pie().unwrap();

        assert_eq!(pie.title, "Total Successful Launches for site A");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slice("Success").unwrap().value, 1);
        assert_eq!(pie.slice("Failure").unwrap().value, 1);
        assert_eq!(pie.slice("Success").unwrap().color, "green");
        assert_eq!(pie.slice("Failure").unwrap().color, "red");
        assert_eq!(pie.text_info, TextInfo::PercentAndLabel);
        assert_eq!(pie.legend_title.as_deref(), Some(OUTCOME_LEGEND_TITLE));
    }

    #[test]
    fn test_single_site_sum_equals_site_count() {
        let dataset = mixed();
        for site in dataset.sites() {
            let chart = aggregate(&dataset, &SiteSelection::site(site.as_str()));
            let expected = dataset.iter().filter(|r| r.launch_site == site).count();
            assert_eq!(chart.as_pie().unwrap().total(), expected, "site {}", site);
        }
    }

    #[test]
    fn test_single_site_only_present_outcomes() {
        let chart = aggregate(&mixed(), &SiteSelection::site("VAFB SLC-4E"));
        let pie = chart.as_pie().unwrap();
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].label, "Success");
        assert_eq!(pie.slices[0].percent, 100.0);
    }

    #[test]
    fn test_unknown_site_is_empty_chart() {
        let chart = aggregate(&mixed(), &SiteSelection::site("Boca Chica"));
        assert!(chart.is_empty());
        assert_eq!(chart.title(), "Total Successful Launches for site Boca Chica");
    }

    #[test]
    fn test_custom_outcome_colors() {
        let theme = ChartTheme {
            success_color: "#00ff00".to_string(),
            failure_color: "#ff0000".to_string(),
            ..Default::default()
        };
        let chart = aggregate_with_theme(&three_launches(), &SiteSelection::site("A"), &theme);
        let pie = chart.as_pie().unwrap();
        assert_eq!(pie.slice("Success").unwrap().color, "#00ff00");
        assert_eq!(pie.slice("Failure").unwrap().color, "#ff0000");
    }

    #[test]
    fn test_percentages() {
        let chart = aggregate(&mixed(), &SiteSelection::site("KSC LC-39A"));
        let pie = chart.as_pie().unwrap();
        let success = pie.slice("Success").unwrap().percent;
        let failure = pie.slice("Failure").unwrap().percent;
        assert!((success - 200.0 / 3.0).abs() < 1e-9);
        assert!((success + failure - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let dataset = mixed();
        let site = SiteSelection::site("CCAFS LC-40");
        assert_eq!(aggregate(&dataset, &site), aggregate(&dataset, &site));
        assert_eq!(
            aggregate(&dataset, &SiteSelection::All),
            aggregate(&dataset, &SiteSelection::All)
        );
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_records(vec![]);
        assert!(aggregate(&dataset, &SiteSelection::All).is_empty());
    }
}
