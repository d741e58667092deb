//! Declarative chart descriptions
//!
//! A `ChartSpec` says what to draw (type, data, labels, colors, title) and
//! nothing about how. The dashboard page renders it on a canvas; the CLI
//! renders it as text.

use serde::Serialize;

/// A chart ready to be rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }

    /// True when there is nothing to draw
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Pie(pie) => pie.slices.is_empty(),
            ChartSpec::Scatter(scatter) => scatter.points.is_empty(),
        }
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            ChartSpec::Pie(pie) => Some(pie),
            ChartSpec::Scatter(_) => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            ChartSpec::Scatter(scatter) => Some(scatter),
            ChartSpec::Pie(_) => None,
        }
    }
}

/// Which annotations to print on each pie slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextInfo {
    Percent,
    PercentAndLabel,
}

/// Pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
    pub text_info: TextInfo,
}

impl PieChart {
    /// Sum of all slice values
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn slice(&self, label: &str) -> Option<&PieSlice> {
        self.slices.iter().find(|s| s.label == label)
    }
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// Share of the chart total, 0-100
    pub percent: f64,
    pub color: String,
}

/// Scatter chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub points: Vec<ScatterPoint>,
    /// Color legend, one entry per category in first-seen order
    pub legend: Vec<LegendEntry>,
    pub legend_title: String,
}

impl ScatterChart {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn color_of(&self, category: &str) -> Option<&str> {
        self.legend
            .iter()
            .find(|e| e.name == category)
            .map(|e| e.color.as_str())
    }
}

/// One scatter point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Color group
    pub category: String,
    /// Shown on hover
    pub hover_text: String,
    pub launch_site: String,
}

/// Legend entry mapping a category to its color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// Axis title and optional fixed ticks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tick_values: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tick_labels: Vec<String>,
}

impl Axis {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tick_values: Vec::new(),
            tick_labels: Vec::new(),
        }
    }

    pub fn ticks(mut self, ticks: &[(f64, &str)]) -> Self {
        self.tick_values = ticks.iter().map(|(v, _)| *v).collect();
        self.tick_labels = ticks.iter().map(|(_, l)| l.to_string()).collect();
        self
    }
}
