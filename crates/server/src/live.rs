// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live state streaming support for dashboard UIs.
//!
//! This module provides read-only, non-authoritative state change
//! notifications via WebSocket connections. Events represent facts about
//! what changed in the canonical state, not directives or domain logic.
//!
//! - Events are broadcast to all connected clients
//! - Events are informational only and never authoritative
//! - No commands are executed over WebSocket connections
//! - Clients must still query canonical state via HTTP for authoritative
//!   data

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use fleetflow_audit::AuditEvent;
use futures::{SinkExt, stream::StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::AppState;

/// Maximum number of events to buffer in the broadcast channel.
/// If clients cannot keep up, older events will be dropped.
pub const EVENT_BUFFER_SIZE: usize = 100;

/// A live state-change notification.
///
/// Derived from successful state transitions; purely informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveEvent {
    /// The action that was applied.
    pub action: String,
    /// The activity-feed line for the change.
    pub message: String,
    /// Feed severity for display.
    pub severity: String,
}

impl LiveEvent {
    /// Builds a live event from a transition's audit event.
    #[must_use]
    pub fn from_audit(event: &AuditEvent) -> Self {
        Self {
            action: event.action.name.clone(),
            message: event.summary(),
            severity: event.severity.to_string(),
        }
    }
}

/// Handler for `GET /api/live`: upgrades to a WebSocket and streams live
/// events until the client disconnects.
pub async fn handle_live_ws(
    ws: WebSocketUpgrade,
    AxumState(app_state): AxumState<AppState>,
) -> Response {
    let receiver: broadcast::Receiver<LiveEvent> = app_state.live.subscribe();
    ws.on_upgrade(move |socket| client_loop(socket, receiver))
}

/// Forwards broadcast events to one connected client.
async fn client_loop(socket: WebSocket, mut events: broadcast::Receiver<LiveEvent>) {
    let (mut sink, mut stream) = socket.split();
    debug!("Live stream client connected");

    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        let Ok(payload) = serde_json::to_string(&event) else {
                            continue;
                        };
                        if sink.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        warn!(missed = missed, "Live stream client lagged behind");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            message = stream.next() => {
                match message {
                    // Inbound messages carry no commands; drain and ignore.
                    Some(Ok(_)) => {}
                    _ => break,
                }
            }
        }
    }

    debug!("Live stream client disconnected");
}
