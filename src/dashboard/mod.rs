//! Reactive Dashboard
//!
//! Wires the dashboard controls to the chart computations.
//!
//! ## Architecture
//!
//! - **Controls**: identifiers for the dropdown, the slider and the two chart
//!   outputs, plus the change events the controls emit
//! - **Layout**: the page description (options, slider bounds, defaults)
//! - **Dashboard**: per-session callback registry; a control change
//!   recomputes exactly the outputs bound to that control
//!
//! ```text
//!   site-dropdown  ──┬──> success-pie-chart
//!                    └──> success-payload-scatter-chart
//!   payload-slider ─────> success-payload-scatter-chart
//! ```

mod controls;
mod layout;
mod reactor;

pub use controls::{ControlEvent, ControlId, OutputId, Selection};
pub use layout::{Dropdown, DropdownOption, Layout, RangeSlider, SliderMark, DASHBOARD_TITLE};
pub use reactor::{ChartCallback, Dashboard, FigureUpdate};
