//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between the
//! dashboard page and the server.

use serde::{Deserialize, Serialize};

use crate::charts::{ChartSpec, PayloadRange, SiteSelection};
use crate::dashboard::{ControlEvent, FigureUpdate, Layout, OutputId};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The site dropdown changed
    SetSite {
        /// "ALL" or a site name
        value: SiteSelection,
    },
    /// The payload slider changed
    SetPayloadRange {
        /// `[low, high]` in kilograms
        value: PayloadRange,
    },
    /// Ping for keepalive
    Ping,
}

impl ClientMessage {
    /// The control event carried by this message, if any
    pub fn into_event(self) -> Option<ControlEvent> {
        match self {
            ClientMessage::SetSite { value } => Some(ControlEvent::SiteChanged(value)),
            ClientMessage::SetPayloadRange { value } => Some(ControlEvent::PayloadChanged(value)),
            ClientMessage::Ping => None,
        }
    }
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// Page layout, sent once after connecting
    Layout {
        layout: Layout,
    },
    /// A chart output must be redrawn
    Figure {
        /// Element id of the chart output
        output: OutputId,
        /// The chart to draw
        figure: ChartSpec,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl From<FigureUpdate> for ServerMessage {
    fn from(update: FigureUpdate) -> Self {
        ServerMessage::Figure {
            output: update.output,
            figure: update.figure,
        }
    }
}
