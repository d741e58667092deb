//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::charts::ChartTheme;
use crate::config::{Config, ServerConfig};
use crate::dashboard::Layout;
use crate::dataset::Dataset;
use crate::websocket::{ConnectionHub, HubConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The launch dataset, read-only after startup
    pub dataset: Arc<Dataset>,
    /// Page layout derived from the dataset
    pub layout: Arc<Layout>,
    /// Chart colors
    pub theme: Arc<ChartTheme>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// WebSocket connection hub for dashboard sessions
    pub ws_hub: Arc<ConnectionHub>,
}

impl AppState {
    /// Create a new AppState with the default theme
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig) -> Self {
        Self::with_theme(dataset, config, ChartTheme::default())
    }

    /// Create AppState with a custom chart theme
    pub fn with_theme(dataset: Arc<Dataset>, config: ApiConfig, theme: ChartTheme) -> Self {
        let layout = Layout::from_dataset(&dataset, config.payload_step);
        let hub_config = HubConfig {
            max_connections: config.max_connections,
        };

        Self {
            dataset,
            layout: Arc::new(layout),
            theme: Arc::new(theme),
            config: Arc::new(config),
            start_time: Instant::now(),
            ws_hub: Arc::new(ConnectionHub::new(hub_config)),
        }
    }

    /// Create AppState from the full application config
    pub fn from_config(dataset: Arc<Dataset>, config: &Config) -> Self {
        let mut api_config = ApiConfig::from(&config.server);
        api_config.payload_step = config.dataset.payload_step;
        Self::with_theme(dataset, api_config, config.theme.clone())
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get WebSocket connection count
    pub async fn ws_connection_count(&self) -> usize {
        self.ws_hub.connection_count().await
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Maximum concurrent dashboard sessions
    pub max_connections: usize,
    /// Payload slider step in kilograms
    pub payload_step: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8030,
            max_connections: 64,
            payload_step: 1000.0,
        }
    }
}

impl From<&ServerConfig> for ApiConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            max_connections: server.max_connections,
            ..Default::default()
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
