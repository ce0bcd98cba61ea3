//! WebSocket Connection Management

use crate::AppState;
use crate::dtos::WsEventDTO;
use crate::ws::TIMEOUT_DURATION_SECONDS;
use axum::extract::ws::{Message, Utf8Bytes, WebSocket};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::time::{Duration, timeout};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tracing::{error, info, instrument, warn};

#[instrument(skip(ws, state))]
pub async fn handle_socket(ws: WebSocket, state: Arc<AppState>) {
    info!("WebSocket connection established");

    let (ws_tx, ws_rx) = ws.split();
    let events = BroadcastStream::new(state.events.subscribe());

    // fired by the listen task when the client goes away
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(listen_ws(ws_rx, shutdown_tx));
    tokio::spawn(write_ws(ws_tx, events, shutdown_rx));
}

#[instrument(skip_all)]
pub async fn write_ws(
    mut websocket_tx: SplitSink<WebSocket, Message>,
    mut events: BroadcastStream<WsEventDTO>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    info!("Write task started");

    loop {
        tokio::select! {
            next = events.next() => {
                match next {
                    Some(Ok(event)) => {
                        if send_event(&mut websocket_tx, &event).await.is_err() {
                            warn!("Failed to send event, closing connection");
                            break;
                        }
                    }
                    Some(Err(BroadcastStreamRecvError::Lagged(skipped))) => {
                        warn!(skipped, "Subscriber lagged, events skipped");
                    }
                    None => {
                        info!("Event channel closed");
                        break;
                    }
                }
            }
            _ = &mut shutdown_rx => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    let _ = websocket_tx.close().await;
    info!("Write task terminated");
}

async fn send_event(
    websocket_tx: &mut SplitSink<WebSocket, Message>,
    event: &WsEventDTO,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(event).map_err(|e| {
        error!("Failed to serialize event: {:?}", e);
        axum::Error::new(e)
    })?;
    websocket_tx.send(Message::Text(Utf8Bytes::from(json))).await
}

#[instrument(skip_all)]
pub async fn listen_ws(mut websocket_rx: SplitStream<WebSocket>, shutdown_tx: oneshot::Sender<()>) {
    info!("Listen task started");
    let timeout_duration = Duration::from_secs(TIMEOUT_DURATION_SECONDS);

    loop {
        match timeout(timeout_duration, websocket_rx.next()).await {
            Ok(Some(Ok(Message::Close(_)))) => {
                info!("Close message received");
                break;
            }
            Ok(Some(Ok(_))) => {}
            Ok(Some(Err(e))) => {
                warn!("WebSocket error: {:?}", e);
                break;
            }
            Ok(None) => {
                info!("WebSocket stream ended");
                break;
            }
            Err(_) => {
                warn!(timeout_secs = TIMEOUT_DURATION_SECONDS, "Connection timeout");
                break;
            }
        }
    }

    let _ = shutdown_tx.send(());
    info!("Listen task terminated");
}
