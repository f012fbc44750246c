//! Configuration, JSON-RPC envelope types, and event/command enums for the xAPI client.

use std::time::Duration;

use pwa_common::XapiError;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for connecting to an endpoint's xAPI WebSocket.
#[derive(Clone)]
pub struct XapiConfig {
    /// Full WebSocket URL, e.g. `wss://10.0.0.10/ws`.
    pub url: String,
    pub username: String,
    pub password: String,
    /// Skip certificate and hostname verification (self-signed endpoints).
    pub accept_invalid_certs: bool,
    /// How long to wait for the reply to a single request.
    pub request_timeout: Duration,
    /// Interval between WebSocket pings; `None` disables them.
    pub keepalive_interval: Option<Duration>,
}

impl std::fmt::Debug for XapiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XapiConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("request_timeout", &self.request_timeout)
            .field("keepalive_interval", &self.keepalive_interval)
            .finish()
    }
}

impl Default for XapiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: "admin".into(),
            password: String::new(),
            accept_invalid_certs: true,
            request_timeout: Duration::from_secs(10),
            keepalive_interval: Some(Duration::from_secs(30)),
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 Types
// ---------------------------------------------------------------------------

/// An outgoing JSON-RPC request.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: serde_json::Value,
}

impl RpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: method.into(),
            params,
        }
    }
}

/// Error object of a failed JSON-RPC call.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Anything the endpoint sends: a response (has `id`) or a notification (has `method`).
#[derive(Debug, Clone, Deserialize)]
pub struct RpcIncoming {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcIncoming {
    /// Numeric request id, if this is a response.
    ///
    /// Endpoints echo ids back as sent, but accept string ids too.
    pub fn response_id(&self) -> Option<u64> {
        match self.id.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Events & Commands
// ---------------------------------------------------------------------------

/// Identifier the endpoint assigned to a feedback subscription.
pub type SubscriptionId = u64;

/// Events emitted by the xAPI client.
#[derive(Debug, Clone)]
pub enum XapiEvent {
    /// A feedback notification for one of our subscriptions.
    ///
    /// `payload` is the notification's params minus the `Id` field, rooted at
    /// the top-level xAPI node (`Event`, `Status` or `Configuration`).
    Feedback {
        subscription: SubscriptionId,
        payload: serde_json::Value,
    },
    /// The connection ended; no further events follow.
    Disconnected { reason: String },
}

pub(crate) type Reply = oneshot::Sender<Result<serde_json::Value, XapiError>>;

/// Commands sent to the connection task from client handles.
#[derive(Debug)]
pub(crate) enum XapiCommand {
    Request {
        method: String,
        params: serde_json::Value,
        reply: Reply,
    },
    Disconnect,
}
