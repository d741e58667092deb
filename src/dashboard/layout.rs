//! Page layout description sent to the front end

use serde::Serialize;

use super::controls::{ControlId, OutputId, Selection};
use crate::charts::{PayloadRange, SiteSelection, ALL_SITES};
use crate::dataset::{Dataset, PayloadBounds};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Everything the page needs to draw its controls and chart slots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub dropdown: Dropdown,
    pub slider: RangeSlider,
    pub outputs: Vec<OutputId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: ControlId,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl Layout {
    /// Derive the layout from the dataset: one dropdown option per site,
    /// slider bounds from the observed payload extremes with the upper bound
    /// rounded up to a whole number of steps
    pub fn from_dataset(dataset: &Dataset, payload_step: f64) -> Self {
        let observed = dataset
            .payload_bounds()
            .unwrap_or(PayloadBounds { min: 0.0, max: 0.0 });
        let bounds = PayloadBounds {
            min: observed.min,
            max: step_aligned_max(observed, payload_step),
        };

        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(dataset.sites().into_iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site,
        }));

        let mut marks = vec![SliderMark {
            value: bounds.min,
            label: format!("{}", bounds.min),
        }];
        if bounds.max > bounds.min {
            marks.push(SliderMark {
                value: bounds.max,
                label: format!("{}", bounds.max),
            });
        }

        Self {
            title: DASHBOARD_TITLE.to_string(),
            dropdown: Dropdown {
                id: ControlId::SiteDropdown,
                options,
                value: SiteSelection::All,
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            slider: RangeSlider {
                id: ControlId::PayloadSlider,
                label: "Payload range (Kg):".to_string(),
                min: bounds.min,
                max: bounds.max,
                step: payload_step,
                marks,
                value: PayloadRange::full(bounds),
            },
            outputs: vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart],
        }
    }

    /// Control values a fresh session starts with
    pub fn initial_selection(&self) -> Selection {
        Selection::new(self.dropdown.value.clone(), self.slider.value)
    }
}

/// Smallest `min + k * step` that is >= `max`, so a stepped range input
/// can reach every observed payload
fn step_aligned_max(bounds: PayloadBounds, step: f64) -> f64 {
    if !(step.is_finite() && step > 0.0) || bounds.max <= bounds.min {
        return bounds.max;
    }
    let steps = ((bounds.max - bounds.min) / step).ceil();
    bounds.min + steps * step
}
