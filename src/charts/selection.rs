//! Selection values supplied by the dashboard controls

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::dataset::PayloadBounds;

/// Sentinel dropdown value meaning "every launch site"
pub const ALL_SITES: &str = "ALL";

/// Launch site dropdown value
///
/// Unknown site names are accepted as-is; they simply match no records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelection::from(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Whether a record at `launch_site` passes this selection
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == launch_site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        SiteSelection::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelection::from(s))
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload mass range `[low, high]` in kilograms
///
/// An inverted range (`low > high`) is not an error; it matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Range covering every observed payload
    pub fn full(bounds: PayloadBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }

    /// Inclusive on both ends
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_selection_sentinel() {
        assert_eq!(SiteSelection::from("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        // Case-sensitive, like the dropdown values
        assert!(!SiteSelection::from("all").is_all());
    }

    #[test]
    fn test_site_selection_serde() {
        let sel: SiteSelection = serde_json::from_str(r#""ALL""#).unwrap();
        assert!(sel.is_all());

        let sel = SiteSelection::site("VAFB SLC-4E");
        assert_eq!(serde_json::to_string(&sel).unwrap(), r#""VAFB SLC-4E""#);
    }

    #[test]
    fn test_site_matches() {
        assert!(SiteSelection::All.matches("anything"));
        assert!(SiteSelection::site("A").matches("A"));
        assert!(!SiteSelection::site("A").matches("B"));
    }

    #[test]
    fn test_payload_range_inclusive() {
        let range = PayloadRange::new(500.0, 1500.0);
        assert!(range.contains(500.0));
        assert!(range.contains(1500.0));
        assert!(!range.contains(499.9));
        assert!(!range.contains(1500.1));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = PayloadRange::new(2000.0, 1000.0);
        assert!(range.is_inverted());
        assert!(!range.contains(1500.0));
        assert!(!range.contains(1000.0));
        assert!(!range.contains(2000.0));
    }

    #[test]
    fn test_payload_range_serde() {
        let range: PayloadRange = serde_json::from_str("[0, 10000]").unwrap();
        assert_eq!(range, PayloadRange::new(0.0, 10000.0));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[0.0,10000.0]");
    }
}
