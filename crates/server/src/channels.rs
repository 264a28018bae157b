//! Inbound channels
//!
//! - `POST /webhook`: dialog-manager fulfillment (JSON)
//! - `POST /whatsapp`, `POST /sms`: Twilio callbacks (form-encoded)
//!
//! All three always answer 200. Malformed webhook requests get the apology
//! text; messaging callbacks report problems in a `status` field.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, Form, State},
    Json,
};
use health_agent_agent::templates::APOLOGY;
use health_agent_core::{Channel, MessageTransport, QueryContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::metrics::{record_error, record_request};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookRequest {
    pub session: String,
    pub query_result: QueryResult,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryResult {
    pub query_text: String,
    pub intent: IntentRef,
    pub parameters: HashMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntentRef {
    pub display_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
}

impl WebhookRequest {
    /// Last path segment of the dialog session name
    pub fn session_key(&self) -> &str {
        self.session.rsplit('/').next().unwrap_or_default()
    }

    pub fn into_context(self) -> QueryContext {
        let session_key = self.session_key().to_string();
        let QueryResult {
            query_text,
            intent,
            parameters,
        } = self.query_result;

        parameters
            .into_iter()
            .filter_map(|(key, value)| parameter_text(value).map(|v| (key, v)))
            .fold(
                QueryContext::new(query_text, session_key).with_intent(intent.display_name),
                |ctx, (key, value)| ctx.with_parameter(key, value),
            )
    }
}

/// Dialog parameters arrive as strings, numbers or nested values
fn parameter_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Array(items) => items.into_iter().find_map(parameter_text),
        // e.g. sys.location arrives as {"city": "Delhi"}
        Value::Object(fields) => fields
            .into_iter()
            .filter(|(_, v)| !matches!(v, Value::Number(_) | Value::Bool(_)))
            .find_map(|(_, v)| parameter_text(v)),
        other => Some(other.to_string()),
    }
}

pub async fn webhook(
    State(state): State<AppState>,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> Json<WebhookResponse> {
    let started = Instant::now();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed webhook request");
            record_error("malformed_webhook");
            return Json(WebhookResponse {
                fulfillment_text: APOLOGY.to_string(),
            });
        },
    };

    let reply = state
        .agent
        .process(request.into_context(), Channel::Webhook)
        .await;

    record_request(Channel::Webhook.as_str(), started.elapsed());
    Json(WebhookResponse {
        fulfillment_text: reply.text,
    })
}

/// Twilio inbound message
#[derive(Debug, Default, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "Body", default)]
    pub body: String,
}

/// Stable anonymous session key for a phone number
pub fn sender_session_key(number: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, number.trim().as_bytes()).to_string()
}

pub async fn whatsapp(
    State(state): State<AppState>,
    form: Result<Form<InboundMessage>, FormRejection>,
) -> Json<Value> {
    let transport = state.services.whatsapp.clone();
    relay(state, form, Channel::WhatsApp, transport).await
}

pub async fn sms(
    State(state): State<AppState>,
    form: Result<Form<InboundMessage>, FormRejection>,
) -> Json<Value> {
    let transport = state.services.sms.clone();
    relay(state, form, Channel::Sms, transport).await
}

/// Answer an inbound message and push the reply back through `transport`
async fn relay(
    state: AppState,
    form: Result<Form<InboundMessage>, FormRejection>,
    channel: Channel,
    transport: Arc<dyn MessageTransport>,
) -> Json<Value> {
    let started = Instant::now();

    let message = match form {
        Ok(Form(message)) => message,
        Err(e) => {
            tracing::warn!(channel = %channel, error = %e, "Malformed message callback");
            record_error("malformed_message");
            return error_reply(APOLOGY);
        },
    };

    if message.body.trim().is_empty() {
        return error_reply("Empty message body");
    }

    let ctx = QueryContext::new(message.body, sender_session_key(&message.from));
    let reply = state.agent.process(ctx, channel).await;

    let to = reply_address(&message.from, channel);
    let outcome = match transport.send(to, &reply.text).await {
        Ok(message_id) => Json(serde_json::json!({
            "status": "success",
            "message_sid": message_id,
            "confidence": reply.confidence,
            "delivered": transport.is_configured(),
        })),
        Err(e) => {
            tracing::warn!(
                channel = %channel,
                transport = transport.name(),
                error = %e,
                "Reply delivery failed"
            );
            record_error("delivery");
            error_reply(&e.to_string())
        },
    };

    record_request(channel.as_str(), started.elapsed());
    outcome
}

/// SMS replies go to the bare number
fn reply_address(from: &str, channel: Channel) -> &str {
    match channel {
        Channel::Sms => from.trim().trim_start_matches("whatsapp:"),
        _ => from.trim(),
    }
}

fn error_reply(message: &str) -> Json<Value> {
    Json(serde_json::json!({ "status": "error", "message": message }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_context() {
        let request: WebhookRequest = serde_json::from_value(serde_json::json!({
            "session": "projects/p/agent/sessions/abc123",
            "queryResult": {
                "queryText": "malaria ke lakshan",
                "intent": { "displayName": "symptoms.query" },
                "parameters": {
                    "disease": "malaria",
                    "location": "",
                    "count": 3,
                    "region": { "city": "Mumbai" }
                }
            }
        }))
        .unwrap();

        assert_eq!(request.session_key(), "abc123");
        let ctx = request.into_context();
        assert_eq!(ctx.session_key, "abc123");
        assert_eq!(ctx.explicit_intent.as_deref(), Some("symptoms.query"));
        assert_eq!(ctx.parameter("disease"), Some("malaria"));
        assert_eq!(ctx.location(), None);
        assert_eq!(ctx.parameter("count"), Some("3"));
        assert_eq!(ctx.parameter("region"), Some("Mumbai"));
    }

    #[test]
    fn test_sender_session_key_is_stable() {
        let a = sender_session_key("whatsapp:+919800000000");
        assert_eq!(a, sender_session_key("whatsapp:+919800000000"));
        assert_ne!(a, sender_session_key("whatsapp:+919800000001"));
    }

    #[test]
    fn test_reply_address() {
        assert_eq!(reply_address("whatsapp:+9198", Channel::Sms), "+9198");
        assert_eq!(reply_address("whatsapp:+9198", Channel::WhatsApp), "whatsapp:+9198");
    }

    #[test]
    fn test_parameter_text() {
        assert_eq!(parameter_text(Value::Null), None);
        assert_eq!(
            parameter_text(serde_json::json!(["", "dengue"])),
            Some("dengue".to_string())
        );
        assert_eq!(
            parameter_text(serde_json::json!({ "city": "Delhi", "country": "" })),
            Some("Delhi".to_string())
        );
        assert_eq!(parameter_text(serde_json::json!({ "city": "", "zip": 110001 })), None);
    }
}
