//! Chart colors

use serde::Deserialize;

use crate::dataset::Outcome;

/// Colors used when building charts
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartTheme {
    #[serde(default = "default_success_color")]
    pub success_color: String,

    #[serde(default = "default_failure_color")]
    pub failure_color: String,

    /// Cycled through for categorical series (sites, booster categories)
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_success_color() -> String {
    "green".to_string()
}

fn default_failure_color() -> String {
    "red".to_string()
}

fn default_palette() -> Vec<String> {
    [
        "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
        "#FF97FF", "#FECB52",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            success_color: default_success_color(),
            failure_color: default_failure_color(),
            palette: default_palette(),
        }
    }
}

impl ChartTheme {
    pub fn outcome_color(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Success => &self.success_color,
            Outcome::Failure => &self.failure_color,
        }
    }

    /// Color for the `index`-th category, wrapping around the palette
    pub fn series_color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return "#636efa";
        }
        &self.palette[index % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_outcome_colors() {
        let theme = ChartTheme::default();
        assert_eq!(theme.outcome_color(Outcome::Success), "green");
        assert_eq!(theme.outcome_color(Outcome::Failure), "red");
    }

    #[test]
    fn test_palette_wraps() {
        let theme = ChartTheme {
            palette: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        assert_eq!(theme.series_color(0), "a");
        assert_eq!(theme.series_color(3), "b");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let theme = ChartTheme {
            palette: Vec::new(),
            ..Default::default()
        };
        assert_eq!(theme.series_color(5), "#636efa");
    }
}
