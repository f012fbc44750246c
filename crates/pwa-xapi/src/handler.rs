//! Incoming JSON-RPC message routing: responses to waiters, feedback to the event channel.

use std::collections::HashMap;

use pwa_common::XapiError;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use super::types::{Reply, RpcIncoming, XapiEvent};

/// Notification method the endpoint uses for feedback.
pub(crate) const FEEDBACK_METHOD: &str = "xFeedback/Event";

/// Handle a single incoming text frame. Never waits: the socket task must
/// keep reading replies while the consumer is busy with earlier feedback.
pub(crate) fn handle_incoming(
    text: &str,
    pending: &mut HashMap<u64, Reply>,
    event_tx: &mpsc::UnboundedSender<XapiEvent>,
) {
    let msg = match serde_json::from_str::<RpcIncoming>(text) {
        Ok(msg) => msg,
        Err(e) => {
            debug!(error = %e, "Unrecognized frame from endpoint");
            return;
        }
    };

    if let Some(id) = msg.response_id() {
        let Some(reply) = pending.remove(&id) else {
            debug!(id, "Response for unknown or expired request");
            return;
        };
        let outcome = match (msg.error, msg.result) {
            (Some(error), _) => {
                debug!(id, code = error.code, message = %error.message, "Request failed");
                Err(XapiError::Rpc {
                    code: error.code,
                    message: error.message,
                })
            }
            (None, Some(result)) => Ok(result),
            (None, None) => Ok(serde_json::Value::Null),
        };
        let _ = reply.send(outcome);
        return;
    }

    match msg.method.as_deref() {
        Some(FEEDBACK_METHOD) => {
            let Some(mut params) = msg.params else {
                warn!("Feedback without params");
                return;
            };
            let Some(subscription) = params.get("Id").and_then(|id| id.as_u64()) else {
                warn!("Feedback without subscription id");
                return;
            };
            if let Some(obj) = params.as_object_mut() {
                obj.remove("Id");
            }
            trace!(subscription, payload = %params, "Feedback received");
            if event_tx
                .send(XapiEvent::Feedback {
                    subscription,
                    payload: params,
                })
                .is_err()
            {
                debug!(subscription, "Feedback dropped, no consumer");
            }
        }
        Some(other) => {
            debug!(method = %other, "Unhandled notification");
        }
        None => {
            debug!("Frame is neither a response nor a notification");
        }
    }
}
