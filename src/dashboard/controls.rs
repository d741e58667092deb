//! Control and output identifiers, and control change events

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::charts::{PayloadRange, SiteSelection};

/// Input controls on the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart outputs on the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A control emitted a new value
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    SiteChanged(SiteSelection),
    PayloadChanged(PayloadRange),
}

impl ControlEvent {
    /// The control that emitted this event
    pub fn control(&self) -> ControlId {
        match self {
            ControlEvent::SiteChanged(_) => ControlId::SiteDropdown,
            ControlEvent::PayloadChanged(_) => ControlId::PayloadSlider,
        }
    }
}

/// Current values of every control in one dashboard session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl Selection {
    pub fn new(site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }

    /// Store the value carried by `event`
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SiteChanged(site) => self.site = site,
            ControlEvent::PayloadChanged(range) => self.payload_range = range,
        }
    }
}
