//! Thin client for a RoomOS endpoint's xAPI over WebSocket.
//!
//! Speaks JSON-RPC 2.0 on `wss://<host>/ws` using `tokio-tungstenite`.
//! Handles Basic authentication, request/response correlation, feedback
//! subscriptions and keepalive pings. A lost connection is reported once
//! as [`XapiEvent::Disconnected`]; reconnecting is left to the caller.

mod client;
mod connection;
mod handler;
pub mod path;
mod types;

pub use client::XapiClient;
pub use types::{
    RpcErrorObject, RpcIncoming, RpcRequest, SubscriptionId, XapiConfig, XapiEvent,
};
