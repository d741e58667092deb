//! Chart Computations
//!
//! The two pure functions behind the dashboard charts:
//!
//! - **aggregator**: success pie chart for a site selection
//! - **correlator**: payload vs. outcome scatter chart for a site and payload range
//!
//! Both take the full dataset and the current selection and return a
//! declarative [`ChartSpec`]. Neither keeps any state between calls, so the
//! same arguments always yield the same chart.
//!
//! # Example
//!
//! ```rust
//! use launchboard::charts::{aggregate, correlate, PayloadRange, SiteSelection};
//! use launchboard::dataset::{Dataset, LaunchRecord, Outcome};
//!
//! let dataset = Dataset::from_records(vec![
//!     LaunchRecord::new("A", 500.0, Outcome::Success, "F9 B1", "FT"),
//!     LaunchRecord::new("A", 1500.0, Outcome::Failure, "F9 B2", "FT"),
//! ]);
//!
//! let pie = aggregate(&dataset, &SiteSelection::site("A"));
//! assert_eq!(pie.as_pie().unwrap().total(), 2);
//!
//! let scatter = correlate(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
//! assert_eq!(scatter.as_scatter().unwrap().len(), 1);
//! ```

pub mod aggregator;
pub mod correlator;
pub mod figure;
pub mod selection;
pub mod tally;
pub mod theme;

pub use aggregator::{aggregate, aggregate_with_theme};
pub use correlator::{correlate, correlate_with_theme};
pub use figure::{
    Axis, ChartSpec, LegendEntry, PieChart, PieSlice, ScatterChart, ScatterPoint, TextInfo,
};
pub use selection::{PayloadRange, SiteSelection, ALL_SITES};
pub use tally::Tally;
pub use theme::ChartTheme;
