//! WebSocket Dashboard Sessions
//!
//! Pushes recomputed charts to the dashboard page whenever one of its
//! controls changes.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Registry of active connections
//! - **Handler**: Upgrades the connection and runs one `Dashboard` per socket
//! - **Messages**: Defines client and server message formats
//!
//! ## Protocol
//!
//! On connect the server sends `connected`, `layout`, then one `figure` per
//! chart output. Afterwards each control message is answered with one
//! `figure` per chart that depends on that control.
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8030/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'set_site', value: 'KSC LC-39A'}));
//!   ws.send(JSON.stringify({type: 'set_payload_range', value: [2000, 8000]}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'figure') draw(msg.output, msg.figure);
//! };
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError};
pub use messages::{ClientMessage, ServerMessage};
