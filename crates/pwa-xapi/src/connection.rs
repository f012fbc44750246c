//! WebSocket handshake and the background connection task.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use futures_util::{SinkExt, StreamExt};
use pwa_common::XapiError;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{mpsc, RwLock};
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{Connector, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, trace, warn};

use super::handler::handle_incoming;
use super::types::{Reply, RpcRequest, XapiCommand, XapiConfig, XapiEvent};

// ---------------------------------------------------------------------------
// Request Ids
// ---------------------------------------------------------------------------

/// Monotonically increasing JSON-RPC request id.
static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_id() -> u64 {
    REQUEST_ID.fetch_add(1, Ordering::Relaxed)
}

// ---------------------------------------------------------------------------
// Handshake
// ---------------------------------------------------------------------------

pub(crate) type DeviceStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// `Basic` authorization header value for the endpoint's local user.
pub(crate) fn basic_auth(username: &str, password: &str) -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

/// Open the WebSocket, authenticating with HTTP Basic auth.
pub(crate) async fn open(config: &XapiConfig) -> Result<DeviceStream, XapiError> {
    let mut request = config
        .url
        .as_str()
        .into_client_request()
        .map_err(|e| XapiError::Connect(format!("invalid url {}: {e}", config.url)))?;
    let auth = HeaderValue::from_str(&basic_auth(&config.username, &config.password))
        .map_err(|e| XapiError::Connect(format!("invalid credentials: {e}")))?;
    request.headers_mut().insert(AUTHORIZATION, auth);

    let tls = native_tls::TlsConnector::builder()
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .danger_accept_invalid_hostnames(config.accept_invalid_certs)
        .build()
        .map_err(|e| XapiError::Connect(format!("tls setup failed: {e}")))?;

    info!(url = %config.url, user = %config.username, "Connecting to endpoint xAPI");

    let handshake = tokio_tungstenite::connect_async_tls_with_config(
        request,
        None,
        false,
        Some(Connector::NativeTls(tls)),
    );
    match tokio::time::timeout(Duration::from_secs(15), handshake).await {
        Ok(Ok((ws, _response))) => Ok(ws),
        Ok(Err(e)) => Err(XapiError::Connect(e.to_string())),
        Err(_elapsed) => Err(XapiError::Connect(
            "handshake timed out after 15s".to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Connection Task
// ---------------------------------------------------------------------------

/// Background task owning the socket.
///
/// Writes requests from `command_rx`, routes replies and feedback, and
/// sends keepalive pings. Runs until the endpoint closes the socket, a
/// socket error occurs, or a `Disconnect` command arrives; it does not
/// reconnect.
pub(crate) async fn connection_task<S>(
    ws: WebSocketStream<S>,
    keepalive_interval: Option<Duration>,
    connected: Arc<RwLock<bool>>,
    event_tx: mpsc::UnboundedSender<XapiEvent>,
    mut command_rx: mpsc::Receiver<XapiCommand>,
) where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (mut sink, mut stream) = ws.split();
    let mut pending: HashMap<u64, Reply> = HashMap::new();

    let period = keepalive_interval.unwrap_or(Duration::from_secs(3600));
    let mut keepalive = tokio::time::interval_at(tokio::time::Instant::now() + period, period);

    let reason = loop {
        tokio::select! {
            cmd = command_rx.recv() => match cmd {
                Some(XapiCommand::Request { method, params, reply }) => {
                    let id = next_id();
                    let request = RpcRequest::new(id, method, params);
                    let json = match serde_json::to_string(&request) {
                        Ok(json) => json,
                        Err(e) => {
                            let _ = reply.send(Err(XapiError::UnexpectedResponse(e.to_string())));
                            continue;
                        }
                    };
                    trace!(id, method = %request.method, "Sending request");
                    if let Err(e) = sink.send(WsMessage::Text(json.into())).await {
                        let _ = reply.send(Err(XapiError::Closed));
                        break format!("write failed: {e}");
                    }
                    pending.insert(id, reply);
                }
                Some(XapiCommand::Disconnect) | None => {
                    let _ = sink.send(WsMessage::Close(None)).await;
                    break "disconnect requested".to_string();
                }
            },

            frame = stream.next() => match frame {
                Some(Ok(WsMessage::Text(text))) => {
                    handle_incoming(&text, &mut pending, &event_tx);
                }
                Some(Ok(WsMessage::Ping(data))) => {
                    let _ = sink.send(WsMessage::Pong(data)).await;
                }
                Some(Ok(WsMessage::Close(frame))) => {
                    info!(frame = ?frame, "Endpoint closed the connection");
                    break "closed by endpoint".to_string();
                }
                None => break "stream ended".to_string(),
                Some(Err(e)) => {
                    warn!(error = %e, "WebSocket error");
                    break format!("websocket error: {e}");
                }
                Some(Ok(_)) => {}
            },

            _ = keepalive.tick(), if keepalive_interval.is_some() => {
                debug!("Keepalive ping");
                if let Err(e) = sink.send(WsMessage::Ping(Vec::new().into())).await {
                    break format!("keepalive failed: {e}");
                }
            }
        }
    };

    // Cleanup.
    *connected.write().await = false;
    for (_, reply) in pending.drain() {
        let _ = reply.send(Err(XapiError::Closed));
    }
    info!(reason = %reason, "xAPI connection ended");
    let _ = event_tx.send(XapiEvent::Disconnected { reason });
}
