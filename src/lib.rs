//! # Launchboard
//!
//! Launch Records Dashboard - an interactive dashboard over a static CSV of
//! launch records, showing launch success by site and the correlation
//! between payload mass and mission outcome.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the in-memory launch table
//! - [`charts`]: Pie (success by site) and scatter (payload vs. outcome) charts
//! - [`dashboard`]: Layout, controls and the reactive callback wiring
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Live dashboard sessions
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::charts::{aggregate, correlate, PayloadRange, SiteSelection};
//! use launchboard::dataset::load_dataset;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = load_dataset(Path::new("spacex_launch_dash.csv"))?;
//!
//!     let pie = aggregate(&dataset, &SiteSelection::All);
//!     println!("{}", pie.title());
//!
//!     let scatter = correlate(
//!         &dataset,
//!         &SiteSelection::Site("CCAFS LC-40".to_string()),
//!         PayloadRange::new(2000.0, 8000.0),
//!     );
//!     println!("{}", scatter.title());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod websocket;

// Re-export top-level types for convenience
pub use dataset::{load_dataset, Dataset, DatasetError, DatasetResult, LaunchRecord, Outcome};

pub use charts::{aggregate, correlate, ChartSpec, ChartTheme, PayloadRange, SiteSelection};

pub use dashboard::{ControlEvent, ControlId, Dashboard, FigureUpdate, Layout, OutputId};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use websocket::{
    websocket_handler, ClientMessage, ConnectionHub, HubConfig, HubError, ServerMessage,
};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};
