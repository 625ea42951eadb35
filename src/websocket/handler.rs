//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and runs one dashboard session per
//! connection. Input events are handled one at a time on the receive task,
//! so the last event a client sends is the last chart state it sees.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::ConnectionHub;
use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::dashboard::{DashboardController, Session};

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
/// It upgrades the HTTP connection to WebSocket and starts message handling.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hub = Arc::clone(&state.ws_hub);
    let controller = Arc::clone(&state.controller);
    ws.on_upgrade(move |socket| handle_socket(socket, hub, controller))
}

/// Handle an established WebSocket connection
async fn handle_socket(
    socket: WebSocket,
    hub: Arc<ConnectionHub>,
    controller: Arc<DashboardController>,
) {
    let (mut sender, mut receiver) = socket.split();

    // Create channel for sending messages to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let connection_id = match hub.register(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register WebSocket connection");
            let error_msg = ServerMessage::Error {
                message: e.to_string(),
            };
            if let Ok(text) = serde_json::to_string(&error_msg) {
                let _ = sender.send(Message::Text(text)).await;
            }
            return;
        }
    };

    // Queue the greeting and the initial render before anything else
    let session = Session::new(controller.initial_state());
    send_initial_render(&hub, &controller, &session, &connection_id).await;

    let conn_id_for_send = connection_id.clone();

    // Task to forward messages from channel to WebSocket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            connection_id = %conn_id_for_send,
                            "WebSocket send failed, closing connection"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let hub_for_recv = Arc::clone(&hub);
    let conn_id_for_recv = connection_id.clone();

    // Task to receive input events and push chart updates
    let mut recv_task = tokio::spawn(async move {
        let mut session = session;
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(
                        &hub_for_recv,
                        &controller,
                        &mut session,
                        &conn_id_for_recv,
                        msg,
                    )
                    .await
                    {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    hub.unregister(&connection_id).await;
}

/// Queue `connected` followed by one `chart_update` per output
async fn send_initial_render(
    hub: &ConnectionHub,
    controller: &DashboardController,
    session: &Session,
    connection_id: &str,
) {
    let connected_msg = ServerMessage::Connected {
        connection_id: connection_id.to_string(),
        layout: controller.layout(),
    };
    let _ = hub.send_to(connection_id, connected_msg).await;

    for update in controller.render_all(session.state()) {
        let _ = hub.send_to(connection_id, update.into()).await;
    }
}

/// Handle a received WebSocket message
///
/// Returns false if the connection should be closed.
async fn handle_ws_message(
    hub: &ConnectionHub,
    controller: &DashboardController,
    session: &mut Session,
    connection_id: &str,
    message: Message,
) -> bool {
    match message {
        Message::Text(text) => {
            match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => {
                    handle_client_message(hub, controller, session, connection_id, client_msg)
                        .await;
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %connection_id,
                        error = %e,
                        text = %text,
                        "Invalid client message"
                    );
                    // Send error but keep connection open
                    let error_msg = ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    };
                    let _ = hub.send_to(connection_id, error_msg).await;
                }
            }
            true
        }
        Message::Binary(_) => {
            let error_msg = ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            };
            let _ = hub.send_to(connection_id, error_msg).await;
            true
        }
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            false
        }
    }
}

/// Handle a parsed client message
async fn handle_client_message(
    hub: &ConnectionHub,
    controller: &DashboardController,
    session: &mut Session,
    connection_id: &str,
    message: ClientMessage,
) {
    let Some(event) = message.into_event() else {
        let _ = hub.send_to(connection_id, ServerMessage::Pong).await;
        return;
    };

    match session.apply(event) {
        Ok(changed) => {
            let _ = hub.record_event(connection_id).await;
            for update in controller.dispatch(session.state(), changed) {
                let _ = hub.send_to(connection_id, update.into()).await;
            }
        }
        Err(e) => {
            tracing::warn!(
                connection_id = %connection_id,
                error = %e,
                "Rejected input event"
            );
            let error_msg = ServerMessage::Error {
                message: e.to_string(),
            };
            let _ = hub.send_to(connection_id, error_msg).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::SliderBounds;
    use crate::data::{LaunchRecord, LaunchTable, Outcome};
    use crate::websocket::HubConfig;

    fn controller() -> DashboardController {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("KSC LC-39A", 9000.0, "FT", Outcome::Success),
        ])
        .unwrap();
        DashboardController::new(Arc::new(table), SliderBounds::default())
    }

    async fn setup() -> (
        ConnectionHub,
        DashboardController,
        Session,
        String,
        mpsc::UnboundedReceiver<ServerMessage>,
    ) {
        let hub = ConnectionHub::new(HubConfig::default());
        let controller = controller();
        let session = Session::new(controller.initial_state());
        let (tx, rx) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();
        (hub, controller, session, id, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ServerMessage>) -> Vec<ServerMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    #[tokio::test]
    async fn test_connect_sends_layout_then_every_chart() {
        let (hub, controller, session, id, mut rx) = setup().await;

        send_initial_render(&hub, &controller, &session, &id).await;

        let messages = drain(&mut rx);
        assert_eq!(messages.len(), 3);
        match &messages[0] {
            ServerMessage::Connected {
                connection_id,
                layout,
            } => {
                assert_eq!(connection_id, &id);
                assert_eq!(layout.payload_slider.value, [500.0, 9000.0]);
                assert_eq!(layout.site_dropdown.value, "ALL");
            }
            other => panic!("Expected Connected, got {:?}", other),
        }

        let outputs: Vec<crate::dashboard::OutputId> = messages[1..]
            .iter()
            .map(|msg| match msg {
                ServerMessage::ChartUpdate { output, figure } => {
                    assert!(!figure.is_empty());
                    *output
                }
                other => panic!("Expected ChartUpdate, got {:?}", other),
            })
            .collect();
        assert_eq!(
            outputs,
            vec![
                crate::dashboard::OutputId::SuccessPieChart,
                crate::dashboard::OutputId::PayloadScatterChart
            ]
        );
    }

    #[tokio::test]
    async fn test_slider_event_updates_scatter_only() {
        let (hub, controller, mut session, id, mut rx) = setup().await;

        let text = r#"{"type": "select_payload_range", "min": 0, "max": 1000}"#;
        let keep_open = handle_ws_message(
            &hub,
            &controller,
            &mut session,
            &id,
            Message::Text(text.to_string()),
        )
        .await;

        assert!(keep_open);
        let messages = drain(&mut rx);
        assert_eq!(messages.len(), 1);
        match &messages[0] {
            ServerMessage::ChartUpdate { output, figure } => {
                assert_eq!(*output, crate::dashboard::OutputId::PayloadScatterChart);
                assert_eq!(figure.data.len(), 1);
            }
            other => panic!("Expected ChartUpdate, got {:?}", other),
        }
        assert_eq!(session.state().payload.as_array(), [0.0, 1000.0]);
    }

    #[tokio::test]
    async fn test_inverted_range_sends_error() {
        let (hub, controller, mut session, id, mut rx) = setup().await;

        let text = r#"{"type": "select_payload_range", "min": 5000, "max": 100}"#;
        handle_ws_message(
            &hub,
            &controller,
            &mut session,
            &id,
            Message::Text(text.to_string()),
        )
        .await;

        let messages = drain(&mut rx);
        assert_eq!(messages.len(), 1);
        assert!(matches!(messages[0], ServerMessage::Error { .. }));
        assert_eq!(session.state().payload.as_array(), [500.0, 9000.0]);
    }

    #[tokio::test]
    async fn test_invalid_json_keeps_connection_open() {
        let (hub, controller, mut session, id, mut rx) = setup().await;

        let keep_open = handle_ws_message(
            &hub,
            &controller,
            &mut session,
            &id,
            Message::Text("not json".to_string()),
        )
        .await;

        assert!(keep_open);
        assert!(matches!(drain(&mut rx)[0], ServerMessage::Error { .. }));
    }

    #[tokio::test]
    async fn test_ping_and_close() {
        let (hub, controller, mut session, id, mut rx) = setup().await;

        handle_ws_message(
            &hub,
            &controller,
            &mut session,
            &id,
            Message::Text(r#"{"type": "ping"}"#.to_string()),
        )
        .await;
        assert!(matches!(drain(&mut rx)[0], ServerMessage::Pong));

        let keep_open =
            handle_ws_message(&hub, &controller, &mut session, &id, Message::Close(None)).await;
        assert!(!keep_open);
    }
}
