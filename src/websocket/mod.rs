//! WebSocket Dashboard Sessions
//!
//! Carries the reactive loop between the dashboard page and the server.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Tracks active connections and routes messages to them
//! - **Handler**: Handles WebSocket upgrade and runs the session loop
//! - **Messages**: Defines client and server message formats
//!
//! ## Protocol
//!
//! On connect the server sends `connected` (with the control layout) followed
//! by one `chart_update` per chart. Every accepted input event is answered
//! with a `chart_update` for each chart that depends on the changed control.
//!
//! ```javascript
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.send(JSON.stringify({type: 'select_site', site: 'KSC LC-39A'}));
//! ws.send(JSON.stringify({type: 'select_payload_range', min: 2000, max: 6000}));
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'chart_update') Plotly.react(msg.output, msg.figure.data, msg.figure.layout);
//! };
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError};
pub use messages::{ClientMessage, ServerMessage};
