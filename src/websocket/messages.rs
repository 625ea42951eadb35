//! WebSocket Message Types
//!
//! Defines all message types exchanged between the dashboard page and the
//! server over a session.

use serde::{Deserialize, Serialize};

use crate::dashboard::{ChartUpdate, DashboardLayout, Figure, InputEvent, OutputId};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The site dropdown changed
    SelectSite {
        /// `"ALL"` or a launch site name
        site: String,
    },
    /// The payload slider changed
    SelectPayloadRange {
        /// Lower bound in kg (inclusive)
        min: f64,
        /// Upper bound in kg (inclusive)
        max: f64,
    },
    /// Ping for keepalive
    Ping,
}

impl ClientMessage {
    /// The input event carried by this message, if any
    pub fn into_event(self) -> Option<InputEvent> {
        match self {
            ClientMessage::SelectSite { site } => Some(InputEvent::SelectSite(site)),
            ClientMessage::SelectPayloadRange { min, max } => {
                Some(InputEvent::SelectPayloadRange { min, max })
            }
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
        /// Control definitions and initial selection
        layout: DashboardLayout,
    },
    /// A chart was recomputed
    ChartUpdate {
        /// Chart to replace
        output: OutputId,
        /// New figure
        figure: Figure,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl From<ChartUpdate> for ServerMessage {
    fn from(update: ChartUpdate) -> Self {
        ServerMessage::ChartUpdate {
            output: update.output,
            figure: update.figure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_deserialize_select_site() {
        let json = r#"{"type": "select_site", "site": "KSC LC-39A"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg.into_event() {
            Some(InputEvent::SelectSite(site)) => assert_eq!(site, "KSC LC-39A"),
            other => panic!("Expected SelectSite, got {:?}", other),
        }
    }

    #[test]
    fn test_client_message_deserialize_range() {
        let json = r#"{"type": "select_payload_range", "min": 1000, "max": 5000}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg.into_event(),
            Some(InputEvent::SelectPayloadRange {
                min: 1000.0,
                max: 5000.0
            })
        );
    }

    #[test]
    fn test_client_message_deserialize_ping() {
        let json = r#"{"type": "ping"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
        assert!(msg.into_event().is_none());
    }

    #[test]
    fn test_server_message_serialize_chart_update() {
        let msg = ServerMessage::ChartUpdate {
            output: OutputId::SuccessPieChart,
            figure: Figure::message("Total Success Launches by Site", "No data"),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "chart_update");
        assert_eq!(json["output"], "success-pie-chart");
        assert_eq!(
            json["figure"]["layout"]["title"]["text"],
            "Total Success Launches by Site"
        );
    }

    #[test]
    fn test_server_message_serialize_error() {
        let msg = ServerMessage::Error {
            message: "Invalid payload range: [5000, 100]".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("Invalid payload range"));
    }
}
