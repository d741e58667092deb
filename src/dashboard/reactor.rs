//! Dashboard Session
//!
//! Callback registry connecting control change events to chart outputs.
//! Each binding declares the controls it reads; when one of those controls
//! changes, the binding is re-evaluated against the new selection.

use serde::Serialize;
use std::sync::Arc;

use super::controls::{ControlEvent, ControlId, OutputId, Selection};
use crate::charts::{aggregate_with_theme, correlate_with_theme, ChartSpec, ChartTheme};
use crate::dataset::Dataset;

/// Computes a chart from the dataset and the current selection
pub type ChartCallback = Box<dyn Fn(&Dataset, &Selection) -> ChartSpec + Send + Sync>;

/// A freshly computed chart for one output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureUpdate {
    pub output: OutputId,
    pub figure: ChartSpec,
}

struct Binding {
    output: OutputId,
    inputs: Vec<ControlId>,
    callback: ChartCallback,
}

/// One user's view of the dashboard: the shared dataset, this session's
/// control values, and the registered chart callbacks
pub struct Dashboard {
    dataset: Arc<Dataset>,
    selection: Selection,
    bindings: Vec<Binding>,
}

impl Dashboard {
    /// Create a session with no bindings
    pub fn new(dataset: Arc<Dataset>, selection: Selection) -> Self {
        Self {
            dataset,
            selection,
            bindings: Vec::new(),
        }
    }

    /// Create a session wired like the launch dashboard page:
    /// the pie chart follows the dropdown, the scatter chart follows both controls
    pub fn with_default_bindings(
        dataset: Arc<Dataset>,
        theme: Arc<ChartTheme>,
        selection: Selection,
    ) -> Self {
        let mut dashboard = Self::new(dataset, selection);

        let pie_theme = Arc::clone(&theme);
        dashboard.register(
            OutputId::SuccessPieChart,
            &[ControlId::SiteDropdown],
            move |dataset, selection| aggregate_with_theme(dataset, &selection.site, &pie_theme),
        );

        dashboard.register(
            OutputId::SuccessPayloadScatterChart,
            &[ControlId::SiteDropdown, ControlId::PayloadSlider],
            move |dataset, selection| {
                correlate_with_theme(dataset, &selection.site, selection.payload_range, &theme)
            },
        );

        dashboard
    }

    /// Register `callback` to recompute `output` whenever any of `inputs` changes
    pub fn register<F>(&mut self, output: OutputId, inputs: &[ControlId], callback: F)
    where
        F: Fn(&Dataset, &Selection) -> ChartSpec + Send + Sync + 'static,
    {
        self.bindings.push(Binding {
            output,
            inputs: inputs.to_vec(),
            callback: Box::new(callback),
        });
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Outputs that depend on `control`, in registration order
    pub fn outputs_for(&self, control: ControlId) -> Vec<OutputId> {
        self.bindings
            .iter()
            .filter(|b| b.inputs.contains(&control))
            .map(|b| b.output)
            .collect()
    }

    /// Evaluate every binding once
    pub fn initial_render(&self) -> Vec<FigureUpdate> {
        self.bindings.iter().map(|b| self.evaluate(b)).collect()
    }

    /// Store the new control value and recompute only the outputs that read it
    pub fn apply(&mut self, event: ControlEvent) -> Vec<FigureUpdate> {
        let control = event.control();
        self.selection.apply(event);

        let updates: Vec<FigureUpdate> = self
            .bindings
            .iter()
            .filter(|b| b.inputs.contains(&control))
            .map(|b| self.evaluate(b))
            .collect();

        tracing::debug!(
            control = %control,
            site = %self.selection.site,
            range = %self.selection.payload_range,
            outputs = updates.len(),
            "Control changed"
        );

        updates
    }

    fn evaluate(&self, binding: &Binding) -> FigureUpdate {
        FigureUpdate {
            output: binding.output,
            figure: (binding.callback)(&self.dataset, &self.selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{PayloadRange, SiteSelection};
    use crate::dataset::{LaunchRecord, Outcome};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dataset() -> Arc<Dataset> {
        Arc::new(Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "b1", "FT"),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "b2", "FT"),
            LaunchRecord::new("B", 3000.0, Outcome::Success, "b3", "B4"),
        ]))
    }

    fn dashboard() -> Dashboard {
        Dashboard::with_default_bindings(
            dataset(),
            Arc::new(ChartTheme::default()),
            Selection::new(SiteSelection::All, PayloadRange::new(500.0, 3000.0)),
        )
    }

    #[test]
    fn test_initial_render_covers_all_outputs() {
        let updates = dashboard().initial_render();
        let outputs: Vec<OutputId> = updates.iter().map(|u| u.output).collect();
        assert_eq!(
            outputs,
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
        assert_eq!(updates[1].figure.as_scatter().unwrap().len(), 3);
    }

    #[test]
    fn test_site_change_updates_both_charts() {
        let mut dashboard = dashboard();
        let updates = dashboard.apply(ControlEvent::SiteChanged(SiteSelection::site("A")));

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].output, OutputId::SuccessPieChart);
        assert_eq!(updates[0].figure.as_pie().unwrap().total(), 2);
        assert_eq!(updates[1].figure.as_scatter().unwrap().len(), 2);
    }

    #[test]
    fn test_payload_change_updates_scatter_only() {
        let mut dashboard = dashboard();
        let updates =
            dashboard.apply(ControlEvent::PayloadChanged(PayloadRange::new(0.0, 2000.0)));

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].output, OutputId::SuccessPayloadScatterChart);
        assert_eq!(updates[0].figure.as_scatter().unwrap().len(), 2);
    }

    #[test]
    fn test_selection_persists_across_events() {
        let mut dashboard = dashboard();
        dashboard.apply(ControlEvent::PayloadChanged(PayloadRange::new(0.0, 10000.0)));
        let updates = dashboard.apply(ControlEvent::SiteChanged(SiteSelection::site("B")));

        let scatter = updates[1].figure.as_scatter().unwrap();
        assert_eq!(scatter.len(), 1);
        assert_eq!(scatter.points[0].x, 3000.0);
        assert_eq!(dashboard.selection().site, SiteSelection::site("B"));
    }

    #[test]
    fn test_outputs_for() {
        let dashboard = dashboard();
        assert_eq!(
            dashboard.outputs_for(ControlId::SiteDropdown),
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
        assert_eq!(
            dashboard.outputs_for(ControlId::PayloadSlider),
            vec![OutputId::SuccessPayloadScatterChart]
        );
    }

    #[test]
    fn test_callback_runs_once_per_relevant_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut dashboard = Dashboard::new(
            dataset(),
            Selection::new(SiteSelection::All, PayloadRange::new(0.0, 1.0)),
        );
        dashboard.register(
            OutputId::SuccessPieChart,
            &[ControlId::SiteDropdown],
            move |dataset, selection| {
                counter.fetch_add(1, Ordering::SeqCst);
                crate::charts::aggregate(dataset, &selection.site)
            },
        );

        dashboard.apply(ControlEvent::PayloadChanged(PayloadRange::new(0.0, 5.0)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        dashboard.apply(ControlEvent::SiteChanged(SiteSelection::site("A")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_repeated_event_yields_identical_figures() {
        let mut dashboard = dashboard();
        let first = dashboard.apply(ControlEvent::SiteChanged(SiteSelection::site("A")));
        let second = dashboard.apply(ControlEvent::SiteChanged(SiteSelection::site("A")));
        assert_eq!(first, second);
    }
}
