//! Public handle for talking to the endpoint's xAPI.

use std::sync::Arc;
use std::time::Duration;

use pwa_common::XapiError;
use serde_json::{json, Value};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{mpsc, oneshot, RwLock};
use tokio_tungstenite::WebSocketStream;
use tracing::debug;

use super::connection::{connection_task, open};
use super::path;
use super::types::{SubscriptionId, XapiCommand, XapiConfig, XapiEvent};

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Handle for interacting with one xAPI connection.
///
/// Every call is a JSON-RPC request answered by the endpoint; the handle
/// waits for that answer (bounded by the request timeout) and nothing more.
/// Cloning is cheap and every clone talks to the same connection.
#[derive(Clone)]
pub struct XapiClient {
    command_tx: mpsc::Sender<XapiCommand>,
    connected: Arc<RwLock<bool>>,
    request_timeout: Duration,
}

impl XapiClient {
    /// Connect and start the background connection task.
    /// Returns `(client, event_receiver)`.
    pub async fn connect(
        config: XapiConfig,
    ) -> Result<(Self, mpsc::UnboundedReceiver<XapiEvent>), XapiError> {
        let ws = open(&config).await?;
        Ok(Self::from_stream(
            ws,
            config.request_timeout,
            config.keepalive_interval,
        ))
    }

    /// Wrap an already-open WebSocket.
    pub fn from_stream<S>(
        ws: WebSocketStream<S>,
        request_timeout: Duration,
        keepalive_interval: Option<Duration>,
    ) -> (Self, mpsc::UnboundedReceiver<XapiEvent>)
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::channel(64);
        let connected = Arc::new(RwLock::new(true));

        let client = Self {
            command_tx,
            connected: Arc::clone(&connected),
            request_timeout,
        };

        tokio::spawn(connection_task(
            ws,
            keepalive_interval,
            connected,
            event_tx,
            command_rx,
        ));

        (client, event_rx)
    }

    /// Send a raw JSON-RPC request and wait for its result.
    pub async fn request(&self, method: &str, params: Value) -> Result<Value, XapiError> {
        let (reply, reply_rx) = oneshot::channel();
        self.command_tx
            .send(XapiCommand::Request {
                method: method.to_string(),
                params,
                reply,
            })
            .await
            .map_err(|_| XapiError::Closed)?;

        match tokio::time::timeout(self.request_timeout, reply_rx).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => Err(XapiError::Closed),
            Err(_) => Err(XapiError::Timeout(
                self.request_timeout.as_secs(),
                method.to_string(),
            )),
        }
    }

    /// Read a status or configuration node (`xGet`).
    pub async fn get(&self, node: &str) -> Result<Value, XapiError> {
        debug!(path = %node, "xGet");
        self.request("xGet", json!({ "Path": path::segments(node) }))
            .await
    }

    /// Write a configuration node (`xSet`).
    pub async fn set(&self, node: &str, value: impl Into<Value>) -> Result<(), XapiError> {
        debug!(path = %node, "xSet");
        self.request(
            "xSet",
            json!({ "Path": path::segments(node), "Value": value.into() }),
        )
        .await
        .map(|_| ())
    }

    /// Run a command (`xCommand`).
    pub async fn command(&self, command: &str, params: Value) -> Result<Value, XapiError> {
        debug!(command = %command, "xCommand");
        self.request(&path::command_method(command), params).await
    }

    /// Run a command that takes a multiline body, such as `Panel Save`.
    pub async fn command_with_body(
        &self,
        command: &str,
        params: Value,
        body: &str,
    ) -> Result<Value, XapiError> {
        let mut params = match params {
            Value::Object(map) => map,
            Value::Null => serde_json::Map::new(),
            other => {
                return Err(XapiError::UnexpectedResponse(format!(
                    "command params must be an object, got {other}"
                )))
            }
        };
        params.insert("body".into(), Value::String(body.to_string()));
        self.command(command, Value::Object(params)).await
    }

    /// Register for feedback on a node; returns the id feedback will carry.
    pub async fn subscribe(
        &self,
        node: &str,
        notify_current_value: bool,
    ) -> Result<SubscriptionId, XapiError> {
        let result = self
            .request(
                "xFeedback/Subscribe",
                json!({
                    "Query": path::segments(node),
                    "NotifyCurrentValue": notify_current_value,
                }),
            )
            .await?;
        let id = result
            .get("Id")
            .and_then(Value::as_u64)
            .ok_or_else(|| XapiError::UnexpectedResponse(format!("subscribe result {result}")))?;
        debug!(path = %node, id, "Subscribed");
        Ok(id)
    }

    /// Check if connected.
    pub async fn is_connected(&self) -> bool {
        *self.connected.read().await
    }

    /// Close the connection.
    pub async fn disconnect(&self) {
        let _ = self.command_tx.send(XapiCommand::Disconnect).await;
    }
}
