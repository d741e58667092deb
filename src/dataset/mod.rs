//! Launch Dataset
//!
//! The static table of launch records the dashboard is built on.
//!
//! - **types**: `LaunchRecord`, `Outcome`, `Dataset`
//! - **loader**: CSV loading with header-based column matching
//! - **error**: Error types
//!
//! The dataset is read once at startup and shared read-only afterwards.
//!
//! # Example
//!
//! ```rust,no_run
//! use launchboard::dataset::load_dataset;
//! use std::path::Path;
//!
//! let dataset = load_dataset(Path::new("data/spacex_launch_dash.csv")).unwrap();
//! println!("{} launches from {} sites", dataset.len(), dataset.sites().len());
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{load_dataset, DatasetLoader};
pub use types::{Dataset, LaunchRecord, Outcome, PayloadBounds};
